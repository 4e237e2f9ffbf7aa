use serde_json::{json, Value};

/// Catalog index body listing `names` in order.
pub fn index(names: &[String]) -> Value {
    json!({
        "count": names.len(),
        "results": names
            .iter()
            .enumerate()
            .map(|(idx, name)| json!({
                "name": name,
                "url": format!("https://pokeapi.co/api/v2/pokemon/{}/", idx + 1),
            }))
            .collect::<Vec<Value>>(),
    })
}

/// Index names `pokemon-1` through `pokemon-{count}`.
pub fn index_names(count: usize) -> Vec<String> {
    (1..=count).map(|i| format!("pokemon-{}", i)).collect()
}

/// `names` array entries for `(language, name)` pairs.
pub fn localized_names(names: &[(&str, &str)]) -> Value {
    Value::Array(
        names
            .iter()
            .map(|(language, name)| {
                json!({
                    "name": name,
                    "language": {
                        "name": language,
                        "url": format!("https://pokeapi.co/api/v2/language/{}/", language),
                    },
                })
            })
            .collect(),
    )
}

/// Body of a type or ability resource carrying only localized names.
pub fn names_resource(names: &[(&str, &str)]) -> Value {
    json!({ "names": localized_names(names) })
}

/// One raw evolution chain node.
///
/// # Example
/// ```
/// use pokedex_test_utils::fixtures::factory::{evolution_chain, evolution_node};
///
/// let chain = evolution_chain(evolution_node(
///     "bulbasaur",
///     vec![evolution_node("ivysaur", vec![evolution_node("venusaur", vec![])])],
/// ));
/// assert_eq!(chain["chain"]["species"]["name"], "bulbasaur");
/// ```
pub fn evolution_node(name: &str, children: Vec<Value>) -> Value {
    json!({
        "is_baby": false,
        "species": {
            "name": name,
            "url": format!("https://pokeapi.co/api/v2/pokemon-species/{}/", name),
        },
        "evolution_details": [],
        "evolves_to": children,
    })
}

/// Evolution chain body rooted at `root`.
pub fn evolution_chain(root: Value) -> Value {
    json!({ "id": 1, "chain": root })
}
