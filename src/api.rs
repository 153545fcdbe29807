pub mod interface;
pub mod server;

pub use interface::{DynAPI, MapAPI, PlaceAPI, API};
pub use server::serve;
