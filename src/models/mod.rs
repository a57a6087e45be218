pub mod assessment;
pub mod conversation;
pub mod resource;
pub mod roadmap;

pub use assessment::*;
pub use conversation::*;
pub use resource::*;
pub use roadmap::*;
