use namewright_core::{
    compose, resolve, CharFilter, CliOverrides, FixedClock, NamePart, NamingContext, PartRole,
    RawConfig, ResourceKind, ResourceNamingService, ResourceTemplate,
};

const TS: i64 = 1_700_000_000;

fn context(service: &str, region: &str, stage: &str, prefix: &str) -> NamingContext {
    let mut raw = RawConfig::default();
    raw.service = Some(service.to_string());
    raw.provider.region = Some(region.to_string());
    raw.provider.stage = Some(stage.to_string());
    raw.provider.prefix = Some(prefix.to_string());
    resolve(&raw, &CliOverrides::default()).expect("valid config")
}

fn service(ctx: NamingContext, ts: i64) -> ResourceNamingService {
    ResourceNamingService::with_clock(ctx, FixedClock(ts))
}

#[test]
fn resource_group_uses_short_tokens() {
    let names = service(context("orders", "West US", "dev", "sls"), TS);
    assert_eq!(names.resource_group_name(), "sls-wus-dev-orders-rg");
}

#[test]
fn rollback_deployment_and_artifact() {
    let names = service(context("orders", "West US", "dev", "sls"), TS);
    let deployment = names.deployment_name();
    assert_eq!(deployment, "sls-wus-dev-orders-rg-deployment-t1700000000");
    assert_eq!(
        names.artifact_name(&deployment),
        "sls-wus-dev-orders-artifact-t1700000000.zip"
    );
}

#[test]
fn long_service_storage_account_fits() {
    let names = service(
        context("My Very Long Service Name Indeed", "West US", "production", "sls"),
        TS,
    );
    let name = names.resource_name(ResourceKind::StorageAccount);
    assert_eq!(name, "slswusprodmyverylongser");
    assert!(name.len() <= 24);
    assert!(name.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
}

#[test]
fn names_are_deterministic_within_a_session() {
    let names = service(context("orders", "westus2", "staging", "acme"), TS);
    for kind in ResourceKind::ALL {
        assert_eq!(names.resource_name(kind), names.resource_name(kind));
    }
}

#[test]
fn every_kind_respects_its_ceiling() {
    let contexts = [
        context("orders", "West US", "dev", "sls"),
        context(&"s".repeat(120), "Southeast Asia", "production", "sls"),
        context("orders", "West US", "dev", &"p".repeat(50)),
        context(&"x y".repeat(40), "Australia Central 2", &"stage".repeat(20), &"q".repeat(80)),
    ];

    for ctx in contexts {
        let names = service(ctx, TS);
        for kind in ResourceKind::ALL {
            let name = names.resource_name(kind);
            let max = kind.template().max_length;
            assert!(
                name.chars().count() <= max,
                "{kind} name '{name}' exceeds {max}"
            );
        }
    }
}

#[test]
fn storage_accounts_are_lowercase_alphanumeric() {
    let services = ["orders", "Ünïcode Sérvice", "a.b-c_d e", "UPPER"];
    for svc in services {
        let names = service(context(svc, "West US", "my stage!", "s-l_s"), TS);
        let name = names.resource_name(ResourceKind::StorageAccount);
        assert!(name.len() <= 24, "{name}");
        assert!(
            name.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()),
            "{name}"
        );
    }
}

#[test]
fn rollback_timestamps_distinguish_sessions() {
    let first = service(context("orders", "West US", "dev", "sls"), 1);
    let second = service(context("orders", "West US", "dev", "sls"), 2);

    assert_ne!(first.deployment_name(), second.deployment_name());
    assert_eq!(first.deployment_name(), first.deployment_name());
}

#[test]
fn artifact_never_keeps_the_deployment_token() {
    let long = "long-service-".repeat(8);
    let services = ["orders", long.as_str()];
    for svc in services {
        let names = service(context(svc, "West US", "dev", "sls"), TS);
        let artifact = names.artifact_name(&names.deployment_name());
        assert!(artifact.ends_with(".zip"), "{artifact}");
        assert!(!artifact.contains("deployment"), "{artifact}");
    }
}

#[test]
fn degenerate_shrink_never_fails() {
    let template = ResourceTemplate {
        roles: &[],
        max_length: 10,
        delimiter: "",
        filter: CharFilter::Alphanumeric,
        budgeted: true,
    };
    let parts = vec![
        NamePart::new(PartRole::Prefix, "p".repeat(50)),
        NamePart::new(PartRole::Region, "wus"),
        NamePart::new(PartRole::Stage, "dev"),
        NamePart::service_hash("abcdef", "orders"),
    ];
    let name = compose(&parts, &template);
    assert!(name.len() <= 10, "{name}");
}

#[test]
fn shared_service_hands_out_one_timestamp() {
    use std::sync::Arc;

    let names = Arc::new(ResourceNamingService::new(context(
        "orders", "West US", "dev", "sls",
    )));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let names = Arc::clone(&names);
            std::thread::spawn(move || names.deployment_name())
        })
        .collect();

    let deployments: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(deployments.iter().all(|d| d == &deployments[0]));
}

#[test]
fn stages_stay_apart_for_long_service_names() {
    let long = "a".repeat(100);
    let dev = service(context(&long, "West US", "dev", "sls"), TS);
    let prod = service(context(&long, "West US", "prod", "sls"), TS);

    for kind in ResourceKind::ALL {
        assert_ne!(dev.resource_name(kind), prod.resource_name(kind), "{kind}");
    }
}
