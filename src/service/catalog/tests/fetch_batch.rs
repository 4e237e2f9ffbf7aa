use super::*;

/// Expect each item to resolve to a complete entry in batch order
#[tokio::test]
async fn enriches_items_in_order() -> Result<(), TestError> {
    let test = with_catalog_records(TestBuilder::new(), 3, 1).build().await?;

    let client = test.client();
    let config = catalog_config(&test);
    let cache = memory_cache();
    let service = CatalogService::new(&client, &cache, &config);

    let batch: Vec<IndexItem> = (1..=3)
        .map(|id| IndexItem {
            name: format!("pokemon-{}", id),
            id,
        })
        .collect();

    let entries = service.fetch_batch(&batch).await;

    let names: Vec<&str> = entries.iter().map(|e| e.korean_name.as_str()).collect();
    assert_eq!(names, vec!["포켓몬1", "포켓몬2", "포켓몬3"]);
    assert_eq!(entries[1].types, vec!["fire"]);
    test.assert_mocks();

    Ok(())
}

/// Expect a failed item to fall back to its formatted name and no types
#[tokio::test]
async fn degrades_failed_item() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_error_endpoint("/pokemon-species/4", 404, 1)
        .with_error_endpoint("/pokemon/4", 500, 1)
        .build()
        .await?;

    let client = test.client();
    let config = catalog_config(&test);
    let cache = memory_cache();
    let service = CatalogService::new(&client, &cache, &config);

    let entries = service
        .fetch_batch(&[IndexItem {
            name: "mr-mime".to_string(),
            id: 4,
        }])
        .await;

    assert_eq!(
        entries,
        vec![CatalogEntry {
            name: "mr-mime".to_string(),
            korean_name: "Mr Mime".to_string(),
            image: "https://images.example.test/pokemon/004.png".to_string(),
            id: 4,
            generation: "2".to_string(),
            types: Vec::new(),
        }]
    );
    test.assert_mocks();

    Ok(())
}

/// Expect a failed item to leave its siblings in the same batch fully enriched
#[tokio::test]
async fn isolates_failed_item_from_siblings() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_species_endpoint("1", SpeciesFixture::named("Alpha", "에이"), 1)
        .with_pokemon_endpoint("1", PokemonFixture::new(1, "alpha").with_types(&["fire"]), 1)
        .with_error_endpoint("/pokemon-species/2", 500, 1)
        .with_error_endpoint("/pokemon/2", 404, 1)
        .with_species_endpoint("3", SpeciesFixture::named("Gamma", "씨"), 1)
        .with_pokemon_endpoint("3", PokemonFixture::new(3, "gamma").with_types(&["water"]), 1)
        .build()
        .await?;

    let client = test.client();
    let config = catalog_config(&test);
    let cache = memory_cache();
    let service = CatalogService::new(&client, &cache, &config);

    let batch = vec![
        IndexItem {
            name: "alpha".to_string(),
            id: 1,
        },
        IndexItem {
            name: "bad-one".to_string(),
            id: 2,
        },
        IndexItem {
            name: "gamma".to_string(),
            id: 3,
        },
    ];

    let entries = service.fetch_batch(&batch).await;

    let summary: Vec<(u32, &str, usize, &str)> = entries
        .iter()
        .map(|e| (e.id, e.korean_name.as_str(), e.types.len(), e.generation.as_str()))
        .collect();
    assert_eq!(
        summary,
        vec![
            (1, "에이", 1, "1"),
            (2, "Bad One", 0, "1"),
            (3, "씨", 1, "1"),
        ]
    );
    test.assert_mocks();

    Ok(())
}

/// Expect a species record without the configured language to fall back to the formatted name
#[tokio::test]
async fn falls_back_when_name_unlocalized() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_species_endpoint("1", SpeciesFixture::new().with_name("en", "Bulbasaur"), 1)
        .with_pokemon_endpoint("1", PokemonFixture::new(1, "bulbasaur"), 1)
        .build()
        .await?;

    let client = test.client();
    let config = catalog_config(&test);
    let cache = memory_cache();
    let service = CatalogService::new(&client, &cache, &config);

    let entries = service
        .fetch_batch(&[IndexItem {
            name: "bulbasaur".to_string(),
            id: 1,
        }])
        .await;

    assert_eq!(entries[0].korean_name, "Bulbasaur");
    assert_eq!(entries[0].types, vec!["grass"]);
    test.assert_mocks();

    Ok(())
}
