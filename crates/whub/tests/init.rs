use whub::domain::config::ApiConfig;
use whub::features;

#[test]
fn init_registers_every_enabled_slice() {
    let slices = whub::init(&ApiConfig::default()).expect("platform init");
    assert_eq!(slices.len(), 1);
    assert!(slices.iter().any(|s| s.id == std::any::TypeId::of::<features::catalog::Catalog>()));
}

#[test]
fn catalog_is_always_enabled() {
    assert!(features::is_enabled("catalog"));
    assert!(!features::is_enabled("inventory"));
    assert_eq!(features::is_enabled("server"), cfg!(feature = "server"));
}
