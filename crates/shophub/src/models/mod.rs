mod account;
mod comment;
mod product;
mod session;
mod store;

pub use account::*;
pub use comment::*;
pub use product::*;
pub use session::*;
pub use store::*;
