mod client;
mod crypto;
pub mod models;
pub mod toplist;

pub use client::{AudioStream, Endpoint, GatewayConfig, NeteaseGateway};
pub use crypto::{
    CryptoError, SESSION_KEY_LEN, WeapiForm, WeapiKeys, canonical_json, decrypt_params,
    random_session_key, weapi, weapi_with_key,
};
