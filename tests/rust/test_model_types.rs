use super::*;

#[test]
fn test_kind_from_str_known() {
    assert_eq!(Kind::from("Deployment"), Kind::Deployment);
    assert_eq!(Kind::from("ConfigMap"), Kind::ConfigMap);
    assert_eq!(Kind::from("Pod").as_str(), "Pod");
}

#[test]
fn test_kind_other_kept_verbatim() {
    let k = Kind::from("CronJob");
    assert_eq!(k, Kind::Other("CronJob".to_string()));
    assert_eq!(k.to_string(), "CronJob");
    assert_eq!(String::from(k), "CronJob");
}

#[test]
fn test_kind_is_case_sensitive() {
    assert_eq!(Kind::from("pod"), Kind::Other("pod".to_string()));
}

#[test]
fn test_node_defaults_to_unknown_status() {
    let n = Node::new("a", Kind::Pod, "a");
    assert!(n.health.is_none());
    assert_eq!(n.health(), Health::Unknown);
    assert_eq!(n.sync(), SyncStatus::Unknown);
}

#[test]
fn test_node_builders() {
    let n = Node::new("a", "Deployment", "web")
        .with_health(Health::Degraded)
        .with_sync(SyncStatus::OutOfSync);
    assert_eq!(n.kind, Kind::Deployment);
    assert_eq!(n.health(), Health::Degraded);
    assert_eq!(n.sync(), SyncStatus::OutOfSync);
}

#[test]
fn test_node_deserializes_original_field_names() {
    let n: Node = serde_json::from_value(serde_json::json!({
        "id": "svc",
        "kind": "Service",
        "name": "frontend-svc",
        "type": "ClusterIP",
        "clusterIP": "10.96.12.34",
        "ports": ["80/TCP"],
        "owner": "team-a"
    }))
    .unwrap();
    assert_eq!(n.kind, Kind::Service);
    assert_eq!(n.attrs.service_type.as_deref(), Some("ClusterIP"));
    assert_eq!(n.attrs.cluster_ip.as_deref(), Some("10.96.12.34"));
    assert_eq!(n.attrs.ports, vec!["80/TCP".to_string()]);
    assert_eq!(n.attrs.extra["owner"], "team-a");
}

#[test]
fn test_node_host_and_secret_fields() {
    let pod: Node = serde_json::from_value(serde_json::json!({
        "id": "p", "kind": "Pod", "name": "p", "node": "node-a", "ready": "1/1"
    }))
    .unwrap();
    assert_eq!(pod.attrs.host_node.as_deref(), Some("node-a"));
    assert_eq!(pod.attrs.ready.as_deref(), Some("1/1"));

    let secret: Node = serde_json::from_value(serde_json::json!({
        "id": "s", "kind": "Secret", "name": "s", "secretType": "Opaque"
    }))
    .unwrap();
    assert_eq!(secret.attrs.secret_type.as_deref(), Some("Opaque"));
}

#[test]
fn test_unrecognised_status_is_unknown() {
    let n: Node = serde_json::from_value(serde_json::json!({
        "id": "a", "kind": "Pod", "name": "a", "health": "Suspended", "sync": "Weird"
    }))
    .unwrap();
    assert_eq!(n.health, Some(Health::Unknown));
    assert_eq!(n.sync, Some(SyncStatus::Unknown));
}

#[test]
fn test_edge_style_defaults_to_solid() {
    let e: Edge =
        serde_json::from_value(serde_json::json!({ "id": "e1", "source": "a", "target": "b" }))
            .unwrap();
    assert_eq!(e.style, EdgeStyle::Solid);

    let d: Edge = serde_json::from_value(
        serde_json::json!({ "id": "e2", "source": "a", "target": "b", "type": "dashed" }),
    )
    .unwrap();
    assert_eq!(d.style, EdgeStyle::Dashed);

    let odd: Edge = serde_json::from_value(
        serde_json::json!({ "id": "e3", "source": "a", "target": "b", "type": "dotted" }),
    )
    .unwrap();
    assert_eq!(odd.style, EdgeStyle::Solid);
}

#[test]
fn test_unknown_edge_type_reads_as_solid() {
    let snap = crate::model::GraphSnapshot::from_json(
        r#"{ "nodes": [], "edges": [
            { "id": "e1", "source": "a", "target": "b", "type": "weird" },
            { "id": "e2", "source": "a", "target": "b" }
        ] }"#,
    )
    .unwrap();
    assert!(snap.edges.iter().all(|e| e.style == EdgeStyle::Solid));
    assert_eq!(
        serde_json::to_value(&snap.edges[0]).unwrap()["type"],
        serde_json::json!("solid")
    );
    assert_eq!(
        serde_json::to_value(Edge::dashed("e", "a", "b")).unwrap()["type"],
        serde_json::json!("dashed")
    );
}

#[test]
fn test_edge_constructors() {
    assert_eq!(Edge::new("e", "a", "b").style, EdgeStyle::Solid);
    let d = Edge::dashed("e", "a", "b");
    assert_eq!(d.style, EdgeStyle::Dashed);
    assert_eq!((d.source.as_str(), d.target.as_str()), ("a", "b"));
}

#[test]
fn test_node_serialization_omits_absent_fields() {
    let json = serde_json::to_value(Node::new("a", Kind::Pod, "a")).unwrap();
    let obj = json.as_object().unwrap();
    assert_eq!(obj.len(), 3, "only id, kind and name expected: {obj:?}");
    assert_eq!(json["kind"], "Pod");
}
