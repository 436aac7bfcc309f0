pub mod layer_connection;
pub mod network;

pub use layer_connection::{LayerConnection, LayerId};
pub use network::{INPUT_LAYER_KEY, Network, NetworkLayer};
