//! Server Command Wrappers
//!
//! Frontend bindings to the shopping list HTTP API.

mod item;

pub use item::*;

/// Path of the items endpoint on the serving origin
pub const API_PATH: &str = "/api/items";

/// Absolute endpoint URL. `SHOPPING_LIST_API_URL` at build time wins over the
/// page origin.
pub fn api_url() -> Result<String, String> {
    if let Some(url) = option_env!("SHOPPING_LIST_API_URL") {
        return Ok(url.to_string());
    }
    let origin = web_sys::window()
        .ok_or("No window")?
        .location()
        .origin()
        .map_err(|e| format!("No origin: {:?}", e))?;
    Ok(format!("{}{}", origin.trim_end_matches('/'), API_PATH))
}
