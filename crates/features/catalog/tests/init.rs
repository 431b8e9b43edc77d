use whub_catalog::{Catalog, init};
use whub_kernel::domain::config::{CatalogConfig, ExclusivityMode};

#[test]
fn init_creates_slice() {
    let slice = init(&CatalogConfig::default()).expect("init should succeed");
    assert_eq!(slice.id, std::any::TypeId::of::<Catalog>());
}

#[test]
fn slice_applies_configured_exclusivity() {
    let config = CatalogConfig { exclusivity: ExclusivityMode::Mutual, audit_registry: false };
    let slice = init(&config).expect("init should succeed");
    let catalog = slice.downcast_ref::<Catalog>().expect("catalog slice");

    assert_eq!(catalog.exclusivity, ExclusivityMode::Mutual);
    assert!(catalog.validate("mug", &["Full Wrap", "Left Side"], None).warnings.is_empty());
    assert_eq!(
        catalog
            .validate("mug", &["Full Wrap", "Left Side"], Some(ExclusivityMode::Standalone))
            .warnings
            .len(),
        1
    );
}
