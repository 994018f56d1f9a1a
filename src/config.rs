//! Environment-sourced configuration for the site and its backend surface.

use anyhow::{Context, Result};
use url::Url;

/// Base URL used when neither environment override is set. Matches the CMS's
/// default development port.
pub const DEFAULT_BASE_URL: &str = "http://localhost:1337";

/// Base URLs for the two contexts the page is built in: the server-side
/// fetch and the client-facing asset references.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Where the listing is fetched from (`FOLIO_API_URL`).
    pub api_url: Url,
    /// Root for asset URLs embedded in the page (`FOLIO_PUBLIC_URL`).
    pub public_url: Url,
}

impl SiteConfig {
    pub fn from_env() -> Result<Self> {
        let api = base_url_from(std::env::var("FOLIO_API_URL").ok());
        let public = base_url_from(std::env::var("FOLIO_PUBLIC_URL").ok());
        Ok(Self {
            api_url: Url::parse(&api).with_context(|| format!("invalid FOLIO_API_URL: {api}"))?,
            public_url: Url::parse(&public)
                .with_context(|| format!("invalid FOLIO_PUBLIC_URL: {public}"))?,
        })
    }
}

fn base_url_from(var: Option<String>) -> String {
    var.filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
}

/// The backend's admin configuration: secret-bearing settings plus feature
/// flags, all sourced from the environment. Secrets stay optional here; the
/// CMS itself refuses to boot without them.
#[derive(Debug, Clone)]
pub struct AdminConfig {
    /// Admin session signing secret (`ADMIN_JWT_SECRET`).
    pub auth_secret: Option<String>,
    /// Salt for issued API tokens (`API_TOKEN_SALT`).
    pub api_token_salt: Option<String>,
    /// Salt for transfer tokens (`TRANSFER_TOKEN_SALT`).
    pub transfer_token_salt: Option<String>,
    pub flags: AdminFlags,
}

/// Feature flags with opt-out semantics: enabled unless the override is the
/// literal string `"false"`. Unset, `"true"`, and junk values all mean
/// enabled, so a typo never silently disables a feature.
#[derive(Debug, Clone, Copy)]
pub struct AdminFlags {
    pub nps: bool,
    pub promote_ee: bool,
}

impl AdminConfig {
    pub fn from_env() -> Self {
        Self {
            auth_secret: secret_from(std::env::var("ADMIN_JWT_SECRET").ok()),
            api_token_salt: secret_from(std::env::var("API_TOKEN_SALT").ok()),
            transfer_token_salt: secret_from(std::env::var("TRANSFER_TOKEN_SALT").ok()),
            flags: AdminFlags {
                nps: flag_from(std::env::var("FLAG_NPS").ok().as_deref()),
                promote_ee: flag_from(std::env::var("FLAG_PROMOTE_EE").ok().as_deref()),
            },
        }
    }
}

fn secret_from(var: Option<String>) -> Option<String> {
    var.filter(|v| !v.trim().is_empty())
}

fn flag_from(value: Option<&str>) -> bool {
    !matches!(value, Some("false"))
}
