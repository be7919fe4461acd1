use anyhow::{anyhow, Context};
use colored::Colorize;
use dex_core::{filter_by_name, DexConfig, NodeView, ResolvedChain, SpeciesId};
use favorites_manager::{
    FavoriteEntry, FavoritesError, FavoritesStore, FileKeyValueStorage, KeyValueStorage,
};
use log::{info, warn};
use pokeapi_client::PokeApiClient;

pub struct Dex<S: KeyValueStorage> {
    client: PokeApiClient,
    favorites: FavoritesStore<S>,
}

impl Dex<FileKeyValueStorage> {
    pub fn from_config(config: &DexConfig) -> anyhow::Result<Self> {
        let client = PokeApiClient::new(config).context("failed to create API client")?;
        let favorites = FavoritesStore::new(FileKeyValueStorage::new(config.data_dir()));
        Ok(Self { client, favorites })
    }
}

impl<S: KeyValueStorage> Dex<S> {
    pub async fn list(&self, search: Option<&str>, limit: u32) -> anyhow::Result<()> {
        let entries = self.client.catalog(limit).await?;
        let matches = filter_by_name(&entries, search.unwrap_or_default());

        if matches.is_empty() {
            println!("{}", "No species match that search.".yellow());
            return Ok(());
        }
        let sprite_base_url = self.client.resolver().sprite_base_url();
        for entry in matches {
            println!(
                "{} {:<16} {}",
                format!("#{:>4}", entry.id).dimmed(),
                entry.name,
                entry.image_url(sprite_base_url).dimmed()
            );
        }
        Ok(())
    }

    pub async fn show(&self, id: SpeciesId) -> anyhow::Result<()> {
        let detail = self.client.pokemon_detail(id).await?;
        let favorited = match self.favorites.is_favorited(detail.id).await {
            Ok(true) => "yes".red().to_string(),
            Ok(false) => "no".to_string(),
            Err(err) => {
                warn!("Could not read favorites: {}", err);
                "unknown".dimmed().to_string()
            }
        };

        println!("{}", format!("{} #{}", detail.name.to_uppercase(), detail.id).bold());
        if let Some(image_url) = &detail.image_url {
            println!("  image:     {}", image_url);
        }
        println!("  category:  {}", detail.category);
        println!("  height:    {} m", detail.height);
        println!("  weight:    {} kg", detail.weight);
        println!("  types:     {}", detail.types.join(", "));
        println!("  abilities: {}", detail.abilities.join(", "));
        println!("  favorite:  {}", favorited);
        println!();
        println!("{}", detail.description);
        Ok(())
    }

    pub async fn evolution(&self, name: &str, id: SpeciesId) -> anyhow::Result<()> {
        let chain = self.client.evolution_chain(name, id).await?;

        let Some(current) = chain.current() else {
            println!(
                "{}",
                format!("{} is not part of its own evolution chain.", name.to_uppercase()).yellow()
            );
            return Ok(());
        };

        println!("{}", format!("{} (current)", current.name().to_uppercase()).bold());
        println!("  image: {}", current.view.image_url);

        if current.immediate_successors.is_empty() {
            println!("{}", "This species has no further evolutions.".dimmed());
            return Ok(());
        }

        println!("Can evolve into:");
        for successor in &current.immediate_successors {
            println!("  {}", describe_successor(successor));
        }
        Ok(())
    }

    /// Replace the favorite `id` with the evolution `target`.
    pub async fn evolve(&self, name: &str, id: SpeciesId, target: SpeciesId) -> anyhow::Result<()> {
        let chain = self.client.evolution_chain(name, id).await?;
        let successor = select_successor(&chain, name, target)?;

        match self
            .favorites
            .evolve(id, successor, self.client.api_base())
            .await
        {
            Ok(_) => {
                info!("Favorite {} evolved into {}", id, successor.id);
                println!(
                    "{}",
                    format!(
                        "{} evolved into {} and was updated in your favorites!",
                        name.to_uppercase(),
                        successor.name.to_uppercase()
                    )
                    .green()
                );
                Ok(())
            }
            Err(FavoritesError::NotFound(_)) => {
                println!(
                    "{}",
                    format!("{} is not in your favorites, so it cannot evolve.", name.to_uppercase())
                        .yellow()
                );
                Ok(())
            }
            Err(err) => Err(err.into()),
        }
    }

    pub async fn favorite(&self, id: SpeciesId, make_favorite: bool) -> anyhow::Result<()> {
        let pokemon = self.client.pokemon(id).await?;
        let entry = FavoriteEntry::for_species(pokemon.id, &pokemon.name, self.client.api_base());

        match self.favorites.toggle(entry, make_favorite).await {
            Ok(_) => {
                let action = if make_favorite { "added to" } else { "removed from" };
                println!(
                    "{}",
                    format!("{} was {} your favorites!", pokemon.name.to_uppercase(), action).green()
                );
                Ok(())
            }
            Err(err @ FavoritesError::Persistence(_)) => {
                // Report what is actually stored rather than what was asked for.
                match self.favorites.is_favorited(pokemon.id).await {
                    Ok(stored) => println!(
                        "{}",
                        format!(
                            "Could not save; {} is {}a favorite.",
                            pokemon.name.to_uppercase(),
                            if stored { "still " } else { "not " }
                        )
                        .red()
                    ),
                    Err(reload) => warn!("Could not re-read favorites: {}", reload),
                }
                Err(err.into())
            }
            Err(err) => Err(err.into()),
        }
    }

    pub async fn favorites(&self, search: Option<&str>) -> anyhow::Result<()> {
        let favorites = self
            .favorites
            .search(search.unwrap_or_default())
            .await
            .context("could not load your favorites")?;

        if favorites.is_empty() {
            println!("{}", "No favorites yet.".yellow());
            return Ok(());
        }
        for fav in favorites {
            println!("{} {}", format!("#{:>4}", fav.id).dimmed(), fav.name);
        }
        Ok(())
    }
}

/// The evolution `target` among the current node's next steps.
fn select_successor<'a>(
    chain: &'a ResolvedChain,
    name: &str,
    target: SpeciesId,
) -> anyhow::Result<&'a NodeView> {
    let current = chain
        .current()
        .ok_or_else(|| anyhow!("{} is not part of its own evolution chain", name))?;

    current.successor(target).ok_or_else(|| {
        let options: Vec<String> = current
            .immediate_successors
            .iter()
            .map(|s| format!("{} (#{})", s.name, s.id))
            .collect();
        if options.is_empty() {
            anyhow!("{} has no further evolutions", name)
        } else {
            anyhow!(
                "{} cannot evolve into #{}; options: {}",
                name,
                target,
                options.join(", ")
            )
        }
    })
}

fn describe_successor(successor: &NodeView) -> String {
    let mut line = format!(
        "{} (#{}) - {}",
        successor.name.to_uppercase(),
        successor.id,
        successor.evolution_details_text
    );
    if successor.can_evolve_further {
        line.push_str(" - evolves further");
    }
    line
}
