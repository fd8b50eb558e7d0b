pub mod army;
pub mod faction;
