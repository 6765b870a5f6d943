//! # Asset Gateway
//!
//! Request handling for the image namespace. Every GET response, hit or
//! miss, carries an integrity witness in the `x-integrity-witness`
//! header; only non-GET methods are turned away without one.

use crate::domain::witness::{Witness, WitnessProof, WITNESS_VERSION};
use crate::store::CertifiedAssetStore;
use tracing::debug;

/// Header carrying the hex-encoded witness.
pub const WITNESS_HEADER: &str = "x-integrity-witness";

/// An inbound asset request.
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// Request method, e.g. `GET`.
    pub method: String,
    /// Requested path.
    pub path: String,
}

/// An outbound asset response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status_code: u16,
    /// Response headers as name/value pairs.
    pub headers: Vec<(String, String)>,
    /// Response body.
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// First header value with the given name, if present.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Serve an asset request against the store.
///
/// - non-GET methods get a bare 405
/// - a certified path gets the stored bytes plus an inclusion witness
/// - anything else gets a 404 plus an absence witness
pub fn handle_request(store: &CertifiedAssetStore, request: &HttpRequest) -> HttpResponse {
    if request.method != "GET" {
        debug!(method = %request.method, "rejecting non-GET asset request");
        return HttpResponse {
            status_code: 405,
            headers: vec![("allow".to_string(), "GET".to_string())],
            body: Vec::new(),
        };
    }

    let asset = store.get_asset(&request.path);
    let leaf = asset.and_then(|_| store.index().prove_inclusion(&request.path));
    match (asset, leaf) {
        (Some(asset), Some(leaf)) => {
            let witness = build_witness(store, WitnessProof::Inclusion(leaf));
            HttpResponse {
                status_code: 200,
                headers: vec![
                    ("content-type".to_string(), asset.content_type.clone()),
                    ("content-length".to_string(), asset.bytes.len().to_string()),
                    (WITNESS_HEADER.to_string(), witness.encode()),
                ],
                body: asset.bytes.clone(),
            }
        }
        _ => {
            let (left, right) = store.index().prove_absence(&request.path);
            let witness = build_witness(store, WitnessProof::Absence { left, right });
            HttpResponse {
                status_code: 404,
                headers: vec![(WITNESS_HEADER.to_string(), witness.encode())],
                body: Vec::new(),
            }
        }
    }
}

/// Sign the current root and wrap a proof into a complete witness.
fn build_witness(store: &CertifiedAssetStore, proof: WitnessProof) -> Witness {
    let root = store.index().root();
    let leaf_count = store.index().leaf_count();
    let message = Witness::signed_message(WITNESS_VERSION, leaf_count, &root);
    Witness {
        version: WITNESS_VERSION,
        root,
        leaf_count,
        signature: store.identity().sign(&message).to_bytes().to_vec(),
        proof,
    }
}
