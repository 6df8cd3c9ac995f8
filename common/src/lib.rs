// platform-neutral page state
//
// nothing in here touches the dom or the network.  the webapp binds these state machines to the
// browser and the server reuses the configuration, so both can be tested natively
pub mod analytics;
pub mod config;
pub mod filter;
pub mod menu;
pub mod resume;
pub mod reveal;
pub mod scroll;
pub mod section;
pub mod storage;
pub mod theme;
