//! Evolution Tree Builder and evolution card enrichment.

use std::collections::{HashMap, HashSet};

use crate::{
    error::Error,
    model::{
        detail::{EvolutionCardData, EvolutionTree},
        pokeapi::EvolutionNode,
    },
    service::{detail::DetailService, settle::collect_successes},
    util::format::image_url,
};

/// Convert a raw evolution chain into a typed tree, root at level 0.
///
/// Every child sits one level below its parent and children keep their source order.
pub fn build_evolution_tree(chain: &EvolutionNode) -> EvolutionTree {
    build_node(chain, 0)
}

fn build_node(node: &EvolutionNode, level: u32) -> EvolutionTree {
    EvolutionTree {
        pokemon: node.species.clone(),
        evolutions: node
            .evolves_to
            .iter()
            .map(|child| build_node(child, level + 1))
            .collect(),
        level,
    }
}

/// Every distinct species name in the tree, pre-order.
pub fn extract_species_names(tree: &EvolutionTree) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut names = Vec::new();
    collect_names(tree, &mut seen, &mut names);
    names
}

fn collect_names(tree: &EvolutionTree, seen: &mut HashSet<String>, names: &mut Vec<String>) {
    if seen.insert(tree.pokemon.name.clone()) {
        names.push(tree.pokemon.name.clone());
    }

    for child in &tree.evolutions {
        collect_names(child, seen, names);
    }
}

impl<'a> DetailService<'a> {
    /// Enrich every species in the tree with its id, localized name and card image.
    ///
    /// Species whose lookups fail are omitted from the map.
    pub async fn load_evolution_cards(
        &self,
        tree: &EvolutionTree,
    ) -> HashMap<String, EvolutionCardData> {
        let names = extract_species_names(tree);

        collect_successes(
            "evolution card data",
            names.into_iter().map(|name| self.fetch_evolution_card(name)),
        )
        .await
        .into_iter()
        .collect()
    }

    async fn fetch_evolution_card(
        &self,
        name: String,
    ) -> Result<(String, EvolutionCardData), Error> {
        let (pokemon, species) = tokio::try_join!(
            self.client.get_pokemon(&name),
            self.client.get_species(&name)
        )?;

        let card = EvolutionCardData {
            id: pokemon.id,
            korean_name: species
                .localized_name(&self.config.language)
                .unwrap_or(&name)
                .to_string(),
            image_url: image_url(&self.config.image_base_url, pokemon.id),
        };

        Ok((name, card))
    }
}
