// Domain-layer modules and shared errors/models
pub mod enrichment {
    pub use crate::enrichment::*;
}

pub mod models {
    pub use crate::models::*;
}

pub mod pacing {
    pub use crate::pacing::*;
}

pub mod errors {
    pub use crate::errors::*;
}
