use mmg_core::error::ParseError;
use mmg_core::model::{Direction, Name, Primitive, TypeKind};
use mmg_core::parse;

const CLUSTERS_MGMT: &str = include_str!("fixtures/clusters_mgmt.yaml");

#[test]
fn parse_services_and_versions() {
    let model = parse::from_yaml(CLUSTERS_MGMT).expect("should parse clusters_mgmt.yaml");
    let services: Vec<String> = model.services.iter().map(|s| s.name.to_string()).collect();
    assert_eq!(services, vec!["clusters_mgmt", "accounts_mgmt"]);

    let version = &model.services[0].versions[0];
    assert_eq!(version.name.to_string(), "v1");
    assert_eq!(version.service(), &Name::new("clusters_mgmt"));
    assert_eq!(model.versions().count(), 2);
}

#[test]
fn parse_types_in_declaration_order() {
    let model = parse::from_yaml(CLUSTERS_MGMT).unwrap();
    let version = &model.services[0].versions[0];

    let declared: Vec<String> = version
        .types()
        .filter(|(_, t)| t.is_enum() || t.is_struct())
        .map(|(_, t)| t.name.pascal_case())
        .collect();
    assert_eq!(
        declared,
        vec!["ClusterState", "Cluster", "CloudProvider", "Metadata"]
    );

    let state = version.find_type(&Name::new("ClusterState")).unwrap();
    let state = version.get_type(state).unwrap();
    let values: Vec<String> = state.values().iter().map(|v| v.name.to_string()).collect();
    assert_eq!(values, vec!["pending", "ready"]);
    assert_eq!(state.values()[1].doc, "The cluster is ready to use.");
    assert_eq!(state.doc, "Overall state of a cluster.");
}

#[test]
fn parse_attribute_references() {
    let model = parse::from_yaml(CLUSTERS_MGMT).unwrap();
    let version = &model.services[0].versions[0];
    let cluster = version.find_type(&Name::new("Cluster")).unwrap();
    let cluster = version.get_type(cluster).unwrap();
    assert!(cluster.is_class());

    let attributes = cluster.attributes();
    assert_eq!(attributes.len(), 6);
    assert_eq!(attributes[0].ty, version.string());
    assert_eq!(attributes[2].ty, version.date());

    let labels = version.get_type(attributes[4].ty).unwrap();
    assert_eq!(labels.kind, TypeKind::Map(version.string()));

    // Forward reference to a type declared after Cluster.
    let provider = version.get_type(attributes[5].ty).unwrap();
    assert_eq!(provider.name, Name::new("CloudProvider"));

    let metadata = version.find_type(&Name::new("Metadata")).unwrap();
    let metadata = version.get_type(metadata).unwrap();
    assert!(metadata.is_struct());
    assert!(!metadata.is_class());
}

#[test]
fn parse_resources_and_paths() {
    let model = parse::from_yaml(CLUSTERS_MGMT).unwrap();
    let version = &model.services[0].versions[0];
    assert!(version.root().is_some());

    let paths: Vec<String> = version
        .paths()
        .iter()
        .map(|path| {
            path.locators
                .iter()
                .map(|l| {
                    if l.variable {
                        format!("{{{}}}", l.name)
                    } else {
                        l.name.to_string()
                    }
                })
                .collect::<Vec<_>>()
                .join("/")
        })
        .collect();
    assert_eq!(
        paths,
        vec!["clusters", "clusters/{cluster}", "cloud_providers"]
    );

    let clusters = version.find_resource(&Name::new("clusters")).unwrap();
    let list = &version.get_resource(clusters).unwrap().methods[0];
    assert_eq!(list.doc, "Retrieves the list of clusters.");
    assert_eq!(list.parameters.len(), 5);
    assert_eq!(list.parameters[0].direction, Direction::InOut);
    assert_eq!(list.parameters[2].direction, Direction::In);
    assert_eq!(list.parameters[3].direction, Direction::Out);

    let items = version.get_type(list.parameters[4].ty).unwrap();
    match items.kind {
        TypeKind::List(element) => {
            assert_eq!(version.get_type(element).unwrap().name, Name::new("Cluster"));
        }
        ref other => panic!("expected list type, got {other:?}"),
    }
}

#[test]
fn parse_builtin_names() {
    let yaml = r#"
services:
  - name: test
    versions:
      - name: v1
        types:
          - name: Everything
            kind: struct
            attributes:
              - { name: a, type: Boolean }
              - { name: b, type: Long }
              - { name: c, type: Float }
              - { name: d, type: Interface }
              - { name: e, type: "[][]String" }
"#;
    let model = parse::from_yaml(yaml).unwrap();
    let version = &model.services[0].versions[0];
    let ty = version.find_type(&Name::new("Everything")).unwrap();
    let attributes = version.get_type(ty).unwrap().attributes();
    assert_eq!(attributes[0].ty, version.primitive(Primitive::Boolean));
    assert_eq!(attributes[1].ty, version.long());
    assert_eq!(attributes[2].ty, version.float());
    assert_eq!(attributes[3].ty, version.interface());

    let outer = version.get_type(attributes[4].ty).unwrap();
    let TypeKind::List(inner) = outer.kind else {
        panic!("expected list");
    };
    assert_eq!(
        version.get_type(inner).unwrap().kind,
        TypeKind::List(version.string())
    );
}

#[test]
fn parse_json_description() {
    let json = r#"{
        "services": [
            {"name": "test", "versions": [{"name": "v2", "types": [
                {"name": "Color", "kind": "enum", "values": ["red"]}
            ]}]}
        ]
    }"#;
    let model = parse::from_json(json).unwrap();
    let version = &model.services[0].versions[0];
    assert!(version.find_type(&Name::new("Color")).is_some());
}

#[test]
fn parse_unknown_type() {
    let yaml = r#"
services:
  - name: test
    versions:
      - name: v1
        types:
          - name: Broken
            kind: struct
            attributes:
              - { name: a, type: Missing }
"#;
    match parse::from_yaml(yaml) {
        Err(ParseError::UnknownType { name, .. }) => assert_eq!(name, "Missing"),
        other => panic!("expected unknown type error, got {other:?}"),
    }
}

#[test]
fn parse_unknown_locator_target() {
    let yaml = r#"
services:
  - name: test
    versions:
      - name: v1
        resources:
          - name: root
            locators:
              - { name: nowhere, target: missing }
"#;
    let err = parse::from_yaml(yaml).unwrap_err();
    assert_eq!(err.to_string(), "unknown resource 'missing' in version 'v1'");
}

#[test]
fn parse_duplicate_type() {
    let yaml = r#"
services:
  - name: test
    versions:
      - name: v1
        types:
          - { name: String, kind: struct }
"#;
    let err = parse::from_yaml(yaml).unwrap_err();
    assert_eq!(err.to_string(), "duplicate type 'String' in version 'v1'");
}
