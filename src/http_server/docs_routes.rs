//! Landing page and API description routes

use axum::{
    response::{Html, IntoResponse},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};

use crate::directory::Airport;

/// Landing page body
pub const LANDING_HTML: &str = "<a href='/airports'>Click here</a> for the airports";

/// Create documentation routes
pub fn docs_routes() -> Router {
    Router::new()
        .route("/", get(landing_handler))
        .route("/api-docs", get(api_docs_handler))
}

async fn landing_handler() -> impl IntoResponse {
    Html(LANDING_HTML)
}

async fn api_docs_handler() -> Json<Value> {
    Json(openapi_document())
}

fn icao_parameter(description: &str) -> Value {
    json!({
        "in": "path",
        "name": "icao",
        "required": true,
        "schema": {"type": "string"},
        "description": description
    })
}

fn json_response(description: &str) -> Value {
    json!({"description": description, "content": {"application/json": {}}})
}

fn airport_ref() -> Value {
    json!({"$ref": "#/components/schemas/Airport"})
}

/// OpenAPI 3 description of the service
pub fn openapi_document() -> Value {
    json!({
        "openapi": "3.0.0",
        "info": {
            "title": "Airports API",
            "version": env!("CARGO_PKG_VERSION"),
            "description": env!("CARGO_PKG_DESCRIPTION")
        },
        "paths": {
            "/": landing_path(),
            "/airports": collection_path(),
            "/airports/{icao}": item_path()
        },
        "components": {
            "schemas": {"Airport": airport_schema()}
        }
    })
}

fn landing_path() -> Value {
    json!({
        "get": {
            "summary": "landing page",
            "responses": {
                "200": {
                    "description": "return a page with a link to airports",
                    "content": {"text/html": {}}
                }
            }
        }
    })
}

fn query_parameter(name: &str, schema: Value, description: &str) -> Value {
    json!({"in": "query", "name": name, "schema": schema, "description": description})
}

fn collection_path() -> Value {
    let parameters = vec![
        query_parameter("city", json!({"type": "string"}), "Only airports in this city"),
        query_parameter("country", json!({"type": "string"}), "Only airports in this country"),
        query_parameter("page", json!({"type": "integer", "default": 1}), "Page number to return"),
        query_parameter(
            "pageSize",
            json!({"type": "integer", "default": 25}),
            "Number of airports on a page",
        ),
    ];

    json!({
        "get": {
            "summary": "Returns an array of airports",
            "parameters": parameters,
            "responses": {
                "200": {
                    "description": "all requested airports",
                    "content": {"application/json": {
                        "schema": {"type": "array", "items": airport_ref()}
                    }}
                },
                "404": json_response("Not found")
            }
        },
        "post": {
            "summary": "Adds a new airport",
            "requestBody": {"content": {"application/json": {"schema": airport_ref()}}},
            "responses": {
                "200": json_response("new airport successfully added"),
                "400": json_response("Bad Request"),
                "409": json_response("Conflict - an airport with that icao already exists")
            }
        }
    })
}

fn item_path() -> Value {
    json!({
        "get": {
            "summary": "Return the airport specified by ICAO",
            "parameters": [icao_parameter("ICAO code of the airport to get")],
            "responses": {
                "200": {
                    "description": "an airport by ICAO",
                    "content": {"application/json": {"schema": airport_ref()}}
                },
                "404": json_response("Not found")
            }
        },
        "patch": {
            "summary": "Replaces the airport specified by ICAO",
            "parameters": [icao_parameter("ICAO code of the airport to update")],
            "requestBody": {"content": {"application/json": {"schema": airport_ref()}}},
            "responses": {
                "200": json_response("airport successfully updated"),
                "400": json_response("Bad Request"),
                "404": json_response("Not found")
            }
        },
        "delete": {
            "summary": "Deletes the airport specified by ICAO",
            "parameters": [icao_parameter("ICAO code of the airport to delete")],
            "responses": {
                "200": json_response("airport successfully deleted"),
                "400": json_response("Bad request")
            }
        }
    })
}

fn airport_schema() -> Value {
    let example = serde_json::to_value(Airport {
        state: "Alaska".to_string(),
        country: "US".to_string(),
        elevation: 450,
        lat: 59.94919968,
        lon: -151.695999146,
        tz: "America/Anchorage".to_string(),
        ..Airport::new("00AK", "Lowell Field", "Anchor Point")
    })
    .unwrap_or(Value::Null);

    json!({
        "type": "object",
        "properties": {
            "icao": {"type": "string"},
            "iata": {"type": "string"},
            "name": {"type": "string"},
            "city": {"type": "string"},
            "state": {"type": "string"},
            "country": {"type": "string"},
            "elevation": {"type": "integer"},
            "lat": {"type": "number", "format": "double"},
            "lon": {"type": "number", "format": "double"},
            "tz": {"type": "string"}
        },
        "required": ["icao", "name", "city"],
        "example": example
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_all_routes() {
        let doc = openapi_document();
        let paths = doc["paths"].as_object().unwrap();

        assert!(paths.contains_key("/"));
        assert!(paths["/airports"].get("get").is_some());
        assert!(paths["/airports"].get("post").is_some());
        for method in ["get", "patch", "delete"] {
            assert!(paths["/airports/{icao}"].get(method).is_some(), "{}", method);
        }
    }

    #[test]
    fn test_schema_example_is_an_airport() {
        let doc = openapi_document();
        let example: Airport =
            serde_json::from_value(doc["components"]["schemas"]["Airport"]["example"].clone())
                .unwrap();
        assert_eq!(example.icao, "00AK");
        assert_eq!(example.elevation, 450);
    }

    #[test]
    fn test_schema_required_fields() {
        let doc = openapi_document();
        assert_eq!(
            doc["components"]["schemas"]["Airport"]["required"],
            json!(["icao", "name", "city"])
        );
    }
}
