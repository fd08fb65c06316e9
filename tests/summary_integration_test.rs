use anyhow::Result;
use receipt_gen::core::ConfigProvider;
use receipt_gen::{
    parse_receipt_line, GenerationEngine, LocalStorage, SalesSummary, SummaryFormat, OUTPUT_FILE,
};
use std::collections::HashMap;
use std::io::BufReader;
use tempfile::TempDir;

struct SeededConfig(u64);

impl ConfigProvider for SeededConfig {
    fn seed(&self) -> Option<u64> {
        Some(self.0)
    }

    fn verbose(&self) -> bool {
        false
    }
}

#[test]
fn test_summary_of_generated_file_matches_line_totals() -> Result<()> {
    let temp_dir = TempDir::new()?;
    GenerationEngine::new(LocalStorage::new(temp_dir.path()), SeededConfig(31)).run()?;

    let path = temp_dir.path().join(OUTPUT_FILE);
    let summary = SalesSummary::from_reader(BufReader::new(std::fs::File::open(&path)?))?;

    let mut expected: HashMap<String, u64> = HashMap::new();
    let mut item_count = 0;
    for line in std::fs::read_to_string(&path)?.lines() {
        for item in parse_receipt_line(line)?.items {
            *expected.entry(item.name).or_default() += u64::from(item.quantity);
            item_count += 1;
        }
    }

    assert_eq!(summary.receipt_count, 100);
    assert_eq!(summary.line_item_count, item_count);
    assert_eq!(summary.products.len(), expected.len());
    for (name, total) in expected {
        assert_eq!(summary.products[&name].total_quantity, total);
    }

    Ok(())
}

#[test]
fn test_duplicate_names_are_merged_with_both_prices() -> Result<()> {
    let input = "1 Персик 1.2 2\n2 Персик 1.6 3, Апельсин 2.1 1\n3 Апельсин 1.5 4\n";
    let summary = SalesSummary::from_reader(input.as_bytes())?;

    let peach = &summary.products["Персик"];
    assert_eq!(peach.total_quantity, 5);
    let prices: Vec<String> = peach.occurrences.iter().map(|(_, p)| p.to_string()).collect();
    assert_eq!(prices, vec!["1.2", "1.6"]);

    assert_eq!(summary.products["Апельсин"].total_quantity, 5);
    Ok(())
}

#[test]
fn test_all_formats_render() -> Result<()> {
    let summary = SalesSummary::from_reader("1 Киви 2.0 3\n".as_bytes())?;

    assert!(summary.render(SummaryFormat::Text)?.contains("Киви"));
    assert!(summary.render(SummaryFormat::Json)?.contains("\"total_quantity\": 3"));
    assert_eq!(
        summary.render(SummaryFormat::Csv)?,
        "product,total_quantity,receipt_count\nКиви,3,1\n"
    );
    Ok(())
}
