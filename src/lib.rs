pub mod api;
pub mod db;
pub mod engine;
pub mod entities;
pub mod error;
pub mod external;
