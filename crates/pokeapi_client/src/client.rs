use std::time::Duration;

use dex_core::catalog::CatalogEntry;
use dex_core::models::{CatalogPage, PokemonApi, SpeciesApi};
use dex_core::{ChainResolver, DexConfig, PokemonDetail, SpeciesId};
use log::{debug, warn};
use reqwest::{Client, Proxy};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{policies::ExponentialBackoff, RetryTransientMiddleware};
use serde::de::DeserializeOwned;

use crate::error::{ApiError, Result};

/// PokeAPI client. Every request is a plain `GET` returning JSON; a
/// non-success status is an error.
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    client: ClientWithMiddleware,
    api_base: String,
    resolver: ChainResolver,
}

impl PokeApiClient {
    pub fn new(config: &DexConfig) -> Result<Self> {
        let client = Self::build_http_client(config)?;
        Ok(Self {
            client: Self::build_retry_client(client, config.max_retries),
            api_base: config.api_base().to_string(),
            resolver: ChainResolver::new(config.sprite_base_url.clone()),
        })
    }

    fn build_http_client(config: &DexConfig) -> Result<Client> {
        let mut builder = Client::builder();
        if !config.http_proxy.is_empty() {
            builder = builder.proxy(Proxy::http(&config.http_proxy)?);
        }
        if !config.https_proxy.is_empty() {
            builder = builder.proxy(Proxy::https(&config.https_proxy)?);
        }
        builder
            .build()
            .map_err(|e| ApiError::Config(format!("Failed to build HTTP client: {e}")))
    }

    fn build_retry_client(client: Client, max_retries: u32) -> ClientWithMiddleware {
        if max_retries == 0 {
            return ClientBuilder::new(client).build();
        }

        let retry_policy = ExponentialBackoff::builder()
            .retry_bounds(Duration::from_millis(200), Duration::from_secs(4))
            .build_with_max_retries(max_retries);

        ClientBuilder::new(client)
            .with(RetryTransientMiddleware::new_with_policy(retry_policy))
            .build()
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    pub fn resolver(&self) -> &ChainResolver {
        &self.resolver
    }

    /// Fetch `url` and decode the body.
    pub async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        debug!("GET {}", url);
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!("GET {} returned {}", url, status);
            return Err(ApiError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response.json::<T>().await?)
    }

    /// `pokemon-species/{name}/`, name lower-cased.
    pub async fn species(&self, name: &str) -> Result<SpeciesApi> {
        let url = format!("{}/pokemon-species/{}/", self.api_base, name.to_lowercase());
        self.fetch_json(&url).await
    }

    pub async fn pokemon(&self, id: SpeciesId) -> Result<PokemonApi> {
        let url = format!("{}/pokemon/{}", self.api_base, id);
        self.fetch_json(&url).await
    }

    /// First `limit` catalog entries in API order.
    pub async fn catalog(&self, limit: u32) -> Result<Vec<CatalogEntry>> {
        let url = format!("{}/pokemon?limit={}", self.api_base, limit);
        let page: CatalogPage = self.fetch_json(&url).await?;
        Ok(page.entries())
    }

    /// Pokemon payload followed by its species payload, merged for display.
    pub async fn pokemon_detail(&self, id: SpeciesId) -> Result<PokemonDetail> {
        let pokemon = self.pokemon(id).await?;
        let species: SpeciesApi = self.fetch_json(&pokemon.species.url).await?;
        Ok(PokemonDetail::from_api(&pokemon, &species))
    }
}
