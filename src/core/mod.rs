pub mod aggregate;
pub mod assembler;
pub mod engine;
pub mod pipeline;

pub use crate::domain::model::{
    Assembly, AssemblyWarning, CartEntry, CartInputs, CartLineItem, CartSummary, Product,
    QuantityPolicy,
};
pub use crate::domain::ports::{
    CartFlow, CartSource, CatalogSource, ConfigProvider, Navigator, Notifier, QuantityUpdater,
    SessionKey, SessionStore,
};
pub use crate::utils::error::Result;
