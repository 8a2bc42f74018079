//! JSON-LD parser for schema.org release documents

use profilegen_core::error::{ProfileGenError, Result};
use profilegen_core::types::{TypeNode, Vocabulary};
use serde::Deserialize;

/// Parser for the `schemaorg-all-*.jsonld` release documents.
///
/// Two passes over the `@graph` array: `rdfs:Class` nodes become
/// `TypeNode`s in declaration order, then `rdf:Property` nodes attach
/// their name to every class listed in `schema:domainIncludes`, in
/// document order. Names come from the node `@id` with its namespace
/// prefix stripped and are kept exactly as written.
#[derive(Debug, Default)]
pub struct JsonLdParser;

impl JsonLdParser {
    /// Create a new parser
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Parse one release document into a [`Vocabulary`]
    ///
    /// # Errors
    ///
    /// Returns `ProfileGenError::Parse` if the content is not valid JSON
    /// or carries no `@graph` nodes
    pub fn parse_str(&self, content: &str, version: &str) -> Result<Vocabulary> {
        let document: VocabularyDocument = serde_json::from_str(content)?;
        if document.graph.is_empty() {
            return Err(ProfileGenError::parse(
                "vocabulary document has no @graph nodes",
            ));
        }

        let mut vocabulary = Vocabulary::new(version);

        for node in &document.graph {
            if !node.is_class() {
                continue;
            }
            let name = local_name(&node.id);
            vocabulary.insert_type(TypeNode {
                name: name.to_string(),
                parents: node.parents().map(|p| local_name(p).to_string()).collect(),
                properties: Vec::new(),
            });
        }

        for node in &document.graph {
            if !node.is_property() {
                continue;
            }
            let property = local_name(&node.id).to_string();
            for domain in node.domains() {
                let type_name = local_name(domain);
                if let Some(type_node) = vocabulary.types.get_mut(type_name) {
                    type_node.properties.push(property.clone());
                } else {
                    // Pending-layer artifacts reference classes outside
                    // the release graph
                    tracing::debug!(
                        property = %property,
                        domain = %type_name,
                        "skipping domain not present in graph"
                    );
                }
            }
        }

        Ok(vocabulary)
    }
}

/// Strip the namespace from a JSON-LD identifier: `schema:Dataset`,
/// `https://schema.org/Dataset` and `rdfs-schema#label` forms all reduce
/// to their final segment
fn local_name(id: &str) -> &str {
    id.rsplit_once(['#', '/', ':']).map_or(id, |(_, name)| name)
}

#[derive(Debug, Deserialize)]
struct VocabularyDocument {
    #[serde(rename = "@graph", default)]
    graph: Vec<GraphNode>,
}

#[derive(Debug, Deserialize)]
struct GraphNode {
    #[serde(rename = "@id")]
    id: String,

    #[serde(rename = "@type", default)]
    kinds: OneOrMany<String>,

    #[serde(rename = "rdfs:subClassOf", default)]
    sub_class_of: OneOrMany<NodeRef>,

    #[serde(rename = "schema:domainIncludes", default)]
    domain_includes: OneOrMany<NodeRef>,
}

impl GraphNode {
    fn is_class(&self) -> bool {
        self.kinds.iter().any(|kind| kind == "rdfs:Class")
    }

    fn is_property(&self) -> bool {
        self.kinds.iter().any(|kind| kind == "rdf:Property")
    }

    fn parents(&self) -> impl Iterator<Item = &str> {
        self.sub_class_of.iter().map(NodeRef::id)
    }

    fn domains(&self) -> impl Iterator<Item = &str> {
        self.domain_includes.iter().map(NodeRef::id)
    }
}

/// JSON-LD values appear both as a single object and as an array of them
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> Default for OneOrMany<T> {
    fn default() -> Self {
        Self::Many(Vec::new())
    }
}

impl<T> OneOrMany<T> {
    fn iter(&self) -> std::slice::Iter<'_, T> {
        match self {
            Self::One(value) => std::slice::from_ref(value).iter(),
            Self::Many(values) => values.iter(),
        }
    }
}

/// Node references appear as `{"@id": ...}` objects or bare IRI strings
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum NodeRef {
    Object {
        #[serde(rename = "@id")]
        id: String,
    },
    Iri(String),
}

impl NodeRef {
    fn id(&self) -> &str {
        match self {
            Self::Object { id } | Self::Iri(id) => id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const DOCUMENT: &str = r#"{
        "@context": {"schema": "https://schema.org/"},
        "@graph": [
            {"@id": "schema:Thing", "@type": "rdfs:Class", "rdfs:label": "Thing"},
            {
                "@id": "schema:CreativeWork",
                "@type": "rdfs:Class",
                "rdfs:label": {"@language": "en", "@value": "CreativeWork"},
                "rdfs:subClassOf": {"@id": "schema:Thing"}
            },
            {
                "@id": "schema:Dataset",
                "@type": ["rdfs:Class"],
                "rdfs:subClassOf": [{"@id": "schema:CreativeWork"}]
            },
            {
                "@id": "schema:name",
                "@type": "rdf:Property",
                "schema:domainIncludes": {"@id": "schema:Thing"}
            },
            {
                "@id": "schema:distribution",
                "@type": "rdf:Property",
                "schema:domainIncludes": "schema:Dataset"
            },
            {
                "@id": "schema:measurementTechnique",
                "@type": "rdf:Property",
                "schema:domainIncludes": [
                    {"@id": "schema:Dataset"},
                    {"@id": "schema:Observation"}
                ]
            }
        ]
    }"#;

    #[test]
    fn test_parses_classes_in_declaration_order() {
        let vocabulary = JsonLdParser::new()
            .parse_str(DOCUMENT, "28.1")
            .expect("document parses");

        assert_eq!(vocabulary.version, "28.1");
        let names: Vec<_> = vocabulary.types.keys().collect();
        assert_eq!(names, ["Thing", "CreativeWork", "Dataset"]);

        let creative_work = vocabulary.get_type("CreativeWork").expect("present");
        assert_eq!(creative_work.parents, ["Thing"]);
        let thing = vocabulary.get_type("Thing").expect("present");
        assert!(thing.parents.is_empty());
    }

    #[test]
    fn test_attaches_properties_in_document_order() {
        let vocabulary = JsonLdParser::new()
            .parse_str(DOCUMENT, "28.1")
            .expect("document parses");

        let dataset = vocabulary.get_type("Dataset").expect("present");
        assert_eq!(dataset.properties, ["distribution", "measurementTechnique"]);
        let thing = vocabulary.get_type("Thing").expect("present");
        assert_eq!(thing.properties, ["name"]);
    }

    #[test]
    fn test_domain_outside_graph_is_skipped_not_fatal() {
        // measurementTechnique also names schema:Observation, which the
        // document does not define
        let vocabulary = JsonLdParser::new()
            .parse_str(DOCUMENT, "28.1")
            .expect("document parses");
        assert!(vocabulary.get_type("Observation").is_none());
    }

    #[test]
    fn test_names_keep_exact_case() {
        let vocabulary = JsonLdParser::new()
            .parse_str(DOCUMENT, "28.1")
            .expect("document parses");
        assert!(vocabulary.get_type("Dataset").is_some());
        assert!(vocabulary.get_type("dataset").is_none());
    }

    #[test]
    fn test_full_iri_identifiers_reduce_to_local_names() {
        let document = r#"{
            "@graph": [
                {"@id": "https://schema.org/Thing", "@type": "rdfs:Class"},
                {
                    "@id": "https://schema.org/name",
                    "@type": "rdf:Property",
                    "schema:domainIncludes": {"@id": "https://schema.org/Thing"}
                }
            ]
        }"#;
        let vocabulary = JsonLdParser::new()
            .parse_str(document, "28.1")
            .expect("document parses");
        assert_eq!(
            vocabulary.get_type("Thing").expect("present").properties,
            ["name"]
        );
    }

    #[test]
    fn test_invalid_json_is_a_parse_error() {
        let err = JsonLdParser::new()
            .parse_str("{", "28.1")
            .expect_err("must fail");
        assert!(matches!(err, ProfileGenError::Parse { .. }));
    }

    #[test]
    fn test_empty_graph_is_a_parse_error() {
        let err = JsonLdParser::new()
            .parse_str(r#"{"@context": {}}"#, "28.1")
            .expect_err("must fail");
        assert!(matches!(err, ProfileGenError::Parse { .. }));
    }

    #[test]
    fn test_local_name_forms() {
        assert_eq!(local_name("schema:Dataset"), "Dataset");
        assert_eq!(local_name("https://schema.org/Dataset"), "Dataset");
        assert_eq!(
            local_name("http://www.w3.org/2000/01/rdf-schema#label"),
            "label"
        );
        assert_eq!(local_name("Dataset"), "Dataset");
    }
}
