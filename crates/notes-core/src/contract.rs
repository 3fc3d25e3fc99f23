//! Endpoint contracts for the notes API.
//!
//! A [`Contract`] binds one HTTP method + path template to a named operation,
//! the schemas of its request body and path parameters, the schema and status
//! of its success response, and its declared error responses. The
//! [`ContractTable`] holds the full API surface as data; the server's
//! dispatcher is a generic interpreter over it.

use http::{Method, StatusCode};

use crate::schema::{Field, Schema};

/// Operation names, one per contract.
pub const CREATE_NOTE: &str = "create_note";
pub const GET_NOTES: &str = "get_notes";
pub const DELETE_NOTES: &str = "delete_notes";
pub const GET_NOTE: &str = "get_note";
pub const DELETE_NOTE: &str = "delete_note";

/// Declarative binding of an endpoint to its typed request/response shapes.
///
/// Contracts are immutable once registered.
#[derive(Debug, Clone)]
pub struct Contract {
    /// Unique operation name within the table.
    pub name: &'static str,
    /// HTTP method the contract answers to.
    pub method: Method,
    /// Path template; segments of the form `{name}` bind path parameters.
    pub path: &'static str,
    /// Schema of the JSON request body, if the operation takes one.
    pub request_body: Option<Schema>,
    /// Schema of the path parameters, if the template declares any.
    pub request_path: Option<Schema>,
    /// Schema of the success response body.
    pub response_body: Schema,
    /// Status code emitted with the success response.
    pub response_status: StatusCode,
    /// Declared error responses as (status, body schema) pairs.
    pub error_responses: Vec<(StatusCode, Schema)>,
}

/// Result of matching a concrete request against the table.
#[derive(Debug)]
pub struct ContractMatch<'a> {
    pub contract: &'a Contract,
    /// Path parameters extracted from the template, in template order.
    pub params: Vec<(&'static str, String)>,
}

/// The read-only registry of endpoint contracts.
///
/// Built once at process start; the dispatcher only reads it.
#[derive(Debug, Clone)]
pub struct ContractTable {
    contracts: Vec<Contract>,
}

/// Schema of one note on the wire.
fn note_schema() -> Schema {
    Schema::object(vec![
        Field::new("id", Schema::Integer),
        Field::new("content", Schema::String),
    ])
}

/// Schema of the error body every contract declares for status 500.
fn error_body_schema() -> Schema {
    Schema::object(vec![
        Field::new("message", Schema::String),
        Field::new("details", Schema::String),
    ])
}

/// Path-parameter schema for the single-note endpoints.
fn note_id_path_schema() -> Schema {
    Schema::object(vec![Field::new("id", Schema::IntegerString)])
}

impl ContractTable {
    /// Build the notes API surface: five contracts, fixed.
    pub fn notes_api() -> Self {
        let server_error = |schema: Schema| vec![(StatusCode::INTERNAL_SERVER_ERROR, schema)];

        let contracts = vec![
            Contract {
                name: CREATE_NOTE,
                method: Method::POST,
                path: "/notes",
                request_body: Some(Schema::object(vec![Field::new("content", Schema::String)])),
                request_path: None,
                response_body: Schema::array(note_schema()),
                response_status: StatusCode::CREATED,
                error_responses: server_error(error_body_schema()),
            },
            Contract {
                name: GET_NOTES,
                method: Method::GET,
                path: "/notes",
                request_body: None,
                request_path: None,
                response_body: Schema::array(note_schema()),
                response_status: StatusCode::OK,
                error_responses: server_error(error_body_schema()),
            },
            Contract {
                name: DELETE_NOTES,
                method: Method::DELETE,
                path: "/notes",
                request_body: None,
                request_path: None,
                response_body: Schema::String,
                response_status: StatusCode::OK,
                error_responses: server_error(error_body_schema()),
            },
            Contract {
                name: GET_NOTE,
                method: Method::GET,
                path: "/notes/{id}",
                request_body: None,
                request_path: Some(note_id_path_schema()),
                response_body: note_schema(),
                response_status: StatusCode::OK,
                error_responses: server_error(error_body_schema()),
            },
            Contract {
                name: DELETE_NOTE,
                method: Method::DELETE,
                path: "/notes/{id}",
                request_body: None,
                request_path: Some(note_id_path_schema()),
                response_body: Schema::String,
                response_status: StatusCode::OK,
                error_responses: server_error(error_body_schema()),
            },
        ];

        Self { contracts }
    }

    /// All registered contracts, in declaration order.
    pub fn contracts(&self) -> &[Contract] {
        &self.contracts
    }

    /// Look up a contract by operation name.
    pub fn by_name(&self, name: &str) -> Option<&Contract> {
        self.contracts.iter().find(|c| c.name == name)
    }

    /// Match a concrete (method, path) pair against the table.
    ///
    /// Returns the first contract whose method matches and whose path
    /// template matches segment-for-segment, together with the extracted
    /// path parameters. `None` means no contract covers the request.
    pub fn lookup(&self, method: &Method, path: &str) -> Option<ContractMatch<'_>> {
        self.contracts.iter().find_map(|contract| {
            if contract.method != *method {
                return None;
            }
            match_template(contract.path, path).map(|params| ContractMatch { contract, params })
        })
    }
}

/// Match `path` against `template`, extracting `{name}` segments.
///
/// Segment counts must agree; literal segments must compare equal; an empty
/// concrete segment never binds a parameter.
fn match_template(template: &'static str, path: &str) -> Option<Vec<(&'static str, String)>> {
    let mut params = Vec::new();
    let mut template_segments = template.trim_matches('/').split('/');
    let mut path_segments = path.trim_matches('/').split('/');

    loop {
        match (template_segments.next(), path_segments.next()) {
            (None, None) => return Some(params),
            (Some(t), Some(p)) => {
                if let Some(name) = t.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
                    if p.is_empty() {
                        return None;
                    }
                    params.push((name, p.to_string()));
                } else if t != p {
                    return None;
                }
            }
            _ => return None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_registers_five_contracts() {
        let table = ContractTable::notes_api();
        assert_eq!(table.contracts().len(), 5);
        for name in [CREATE_NOTE, GET_NOTES, DELETE_NOTES, GET_NOTE, DELETE_NOTE] {
            assert!(table.by_name(name).is_some(), "missing contract {name}");
        }
    }

    #[test]
    fn lookup_matches_collection_routes_by_method() {
        let table = ContractTable::notes_api();

        let m = table.lookup(&Method::POST, "/notes").unwrap();
        assert_eq!(m.contract.name, CREATE_NOTE);
        assert!(m.params.is_empty());

        let m = table.lookup(&Method::GET, "/notes").unwrap();
        assert_eq!(m.contract.name, GET_NOTES);

        let m = table.lookup(&Method::DELETE, "/notes").unwrap();
        assert_eq!(m.contract.name, DELETE_NOTES);
    }

    #[test]
    fn lookup_extracts_path_parameter() {
        let table = ContractTable::notes_api();
        let m = table.lookup(&Method::GET, "/notes/17").unwrap();
        assert_eq!(m.contract.name, GET_NOTE);
        assert_eq!(m.params, vec![("id", "17".to_string())]);
    }

    #[test]
    fn lookup_rejects_unknown_path_and_method() {
        let table = ContractTable::notes_api();
        assert!(table.lookup(&Method::GET, "/unknown").is_none());
        assert!(table.lookup(&Method::PUT, "/notes").is_none());
        assert!(table.lookup(&Method::GET, "/notes/1/extra").is_none());
    }

    #[test]
    fn single_note_contracts_declare_path_schema() {
        let table = ContractTable::notes_api();
        assert!(table.by_name(GET_NOTE).unwrap().request_path.is_some());
        assert!(table.by_name(DELETE_NOTE).unwrap().request_path.is_some());
        assert!(table.by_name(GET_NOTES).unwrap().request_path.is_none());
    }

    #[test]
    fn every_contract_declares_a_server_error_response() {
        let table = ContractTable::notes_api();
        for contract in table.contracts() {
            assert!(
                contract
                    .error_responses
                    .iter()
                    .any(|(status, _)| *status == StatusCode::INTERNAL_SERVER_ERROR),
                "contract {} lacks a 500 response",
                contract.name
            );
        }
    }
}
