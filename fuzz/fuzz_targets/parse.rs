#![no_main]

use libfuzzer_sys::fuzz_target;
use po_reconcile::catalog::{Catalog, Parser};
use pretty_assertions::assert_eq;

fuzz_target!(|text: &str| {
    let catalog = Catalog::from_text(text);
    let once = catalog.to_lines();
    let twice = Parser::new().parse(&once).to_lines();
    assert_eq!(twice, once);

    let once = catalog.to_text();
    let twice = Catalog::from_text(&once).to_text();
    assert_eq!(twice, once);
});
