pub mod answer;
pub mod document;
pub mod profile;
pub mod review;
pub mod subscription;

pub use answer::*;
pub use document::*;
pub use profile::*;
pub use review::*;
pub use subscription::*;
