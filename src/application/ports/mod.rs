// src/application/ports/mod.rs
pub mod html;
pub mod security;
pub mod storage;
pub mod time;
pub mod util;

// Type aliases to make port injection sites more descriptive and reduce `dyn` noise
pub type ClockPort = dyn time::Clock;
pub type SlugGeneratorPort = dyn util::SlugGenerator;
pub type HtmlSanitizerPort = dyn html::HtmlSanitizer;
pub type ObjectStoragePort = dyn storage::ObjectStorage;
pub type AdminAuthenticatorPort = dyn security::AdminAuthenticator;
