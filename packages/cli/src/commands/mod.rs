pub mod apply;
pub mod catalog;
pub mod check;
pub mod init;
pub mod publish;
pub mod render;
mod site_file;

pub use apply::{apply, ApplyArgs};
pub use catalog::{catalog, CatalogArgs};
pub use check::{check, CheckArgs};
pub use init::{init, InitArgs};
pub use publish::{publish, PublishArgs};
pub use render::{render, RenderArgs};
