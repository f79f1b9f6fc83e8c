use rand::Rng;
use serde::Serialize;
use serde_json::Value;

use crate::error::ApiError;

pub const EMBEDDING_DIM: usize = 1024;
pub const DEFAULT_MODEL: &str = "mock-model";

/// Request fields after tolerant extraction. Missing or wrong-typed fields
/// take their defaults instead of failing.
#[derive(Debug, PartialEq)]
pub struct EmbeddingRequest {
    pub model: String,
    pub input: String,
}

impl EmbeddingRequest {
    pub fn from_slice(body: &[u8]) -> Result<Self, ApiError> {
        let value: Value = serde_json::from_slice(body)?;
        let fields = match value {
            Value::Object(fields) => fields,
            other => return Err(ApiError::NotAnObject(kind(&other))),
        };

        let model = match fields.get("model") {
            Some(Value::String(model)) => model.clone(),
            _ => DEFAULT_MODEL.to_owned(),
        };
        let input = match fields.get("input") {
            Some(Value::String(input)) => input.clone(),
            _ => String::new(),
        };

        Ok(Self { model, input })
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[derive(Debug, Serialize)]
pub struct EmbeddingResponse {
    pub object: &'static str,
    pub data: Vec<Embedding>,
    pub model: String,
    pub usage: Usage,
}

#[derive(Debug, Serialize)]
pub struct Embedding {
    pub embedding: Vec<f64>,
    pub index: usize,
    pub object: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Usage {
    pub prompt_tokens: usize,
    pub completion_tokens: usize,
    pub total_tokens: usize,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl EmbeddingResponse {
    pub fn mock<R: Rng>(request: EmbeddingRequest, rng: &mut R) -> Self {
        let prompt_tokens = count_tokens(&request.input);

        EmbeddingResponse {
            object: "list",
            data: vec![Embedding {
                embedding: random_embedding(rng),
                index: 0,
                object: "embedding",
            }],
            model: request.model,
            usage: Usage {
                prompt_tokens,
                completion_tokens: 0,
                total_tokens: prompt_tokens,
            },
        }
    }
}

/// Each component is drawn independently from `[-0.1, 0.1)`.
pub fn random_embedding<R: Rng>(rng: &mut R) -> Vec<f64> {
    (0..EMBEDDING_DIM).map(|_| rng.gen_range(-0.1..0.1)).collect()
}

pub fn count_tokens(input: &str) -> usize {
    input.split_whitespace().count()
}
