use crate::ingress::{ConvertError, load_ingresses, parse_ingress_str};

use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

const INGRESS: &str = r#"
apiVersion: networking.k8s.io/v1
kind: Ingress
metadata:
  name: web
  namespace: shop
  annotations:
    nginx.ingress.kubernetes.io/ssl-redirect: "true"
    nginx.ingress.kubernetes.io/configuration-snippet: |
      add_header X-Test "1";
spec:
  rules:
    - host: shop.example.com
      http:
        paths:
          - path: /api
            pathType: Prefix
            backend:
              service:
                name: api
                port:
                  number: 8080
"#;

#[test]
fn parse_ingress_reads_metadata_and_rules() {
    // Act
    let ingresses = parse_ingress_str(INGRESS, Path::new("web.yaml")).unwrap();

    // Assert
    assert_eq!(ingresses.len(), 1);
    let ingress = &ingresses[0];
    assert_eq!(ingress.metadata.name, "web");
    assert_eq!(ingress.metadata.namespace, "shop");
    assert_eq!(
        ingress
            .metadata
            .annotations
            .get("nginx.ingress.kubernetes.io/configuration-snippet")
            .map(String::as_str),
        Some("add_header X-Test \"1\";\n")
    );

    let path = &ingress.spec.rules[0].http.as_ref().unwrap().paths[0];
    assert_eq!(path.path.as_deref(), Some("/api"));
    assert_eq!(path.backend.service.as_ref().unwrap().port.number, Some(8080));
}

#[test]
fn parse_ingress_defaults_namespace() {
    // Arrange
    let src = r#"
kind: Ingress
metadata:
  name: bare
"#;

    // Act
    let ingresses = parse_ingress_str(src, Path::new("bare.yaml")).unwrap();

    // Assert
    assert_eq!(ingresses[0].metadata.namespace, "default");
    assert!(ingresses[0].metadata.annotations.is_empty());
}

#[test]
fn parse_ingress_skips_other_kinds_and_empty_documents() {
    // Arrange
    let src = format!(
        "---\nkind: Service\nmetadata:\n  name: api\n---\n---{}",
        INGRESS
    );

    // Act
    let ingresses = parse_ingress_str(&src, Path::new("mixed.yaml")).unwrap();

    // Assert
    assert_eq!(ingresses.len(), 1);
    assert_eq!(ingresses[0].metadata.name, "web");
}

#[test]
fn parse_ingress_reports_invalid_yaml() {
    // Act
    let result = parse_ingress_str("kind: [Ingress", Path::new("broken.yaml"));

    // Assert
    assert!(matches!(result, Err(ConvertError::Parse { .. })));
}

#[test]
fn load_ingresses_walks_directory() {
    // Arrange
    let dir = tempdir().unwrap();
    let root = dir.path();
    fs::create_dir_all(root.join("team")).unwrap();
    fs::write(root.join("team/web.yaml"), INGRESS).unwrap();
    fs::write(root.join("notes.txt"), "not yaml: [").unwrap();

    // Act
    let ingresses = load_ingresses(root, "**/*.yaml").unwrap();

    // Assert
    assert_eq!(ingresses.len(), 1);
    assert_eq!(ingresses[0].file, root.join("team/web.yaml"));
}

#[test]
fn load_ingresses_reports_missing_file() {
    // Act
    let result = load_ingresses(Path::new("/does/not/exist.yaml"), "**/*.yaml");

    // Assert
    assert!(matches!(result, Err(ConvertError::ReadFile { .. })));
}
