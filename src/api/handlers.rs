use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::{Html, Json},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::api::accept::AcceptsJson;
use crate::api::error::ApiError;
use crate::logic::{FetchError, RepositoryOperations};
use crate::model::Repository;
use crate::upstream::SourceHost;

pub type AppState<S> = Arc<S>;

/// Simple health check endpoint
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

#[derive(Debug, Deserialize)]
pub struct RepositoriesQuery {
    pub username: Option<String>,
}

/// GET /repositories?username={username}
/// List a user's non-fork repositories together with their branches
pub async fn get_repositories<S: SourceHost>(
    State(host): State<AppState<S>>,
    _accept: AcceptsJson,
    query: Result<Query<RepositoriesQuery>, QueryRejection>,
) -> Result<Json<Vec<Repository>>, ApiError> {
    let Query(query) = query.map_err(|e| ApiError::bad_request(&e.body_text()))?;
    let username = query
        .username
        .ok_or_else(|| ApiError::missing_parameter("username"))?;

    log::info!("Listing repositories for '{}'", username);

    let repositories = RepositoryOperations::list_user_repositories(&*host, &username)
        .await
        .map_err(|e| {
            match &e {
                FetchError::UserNotFound(_) => log::info!("{}", e),
                _ => log::warn!("Repository listing for '{}' failed: {}", username, e),
            }
            ApiError::from(e)
        })?;

    log::info!(
        "Returning {} repositories for '{}'",
        repositories.len(),
        username
    );

    Ok(Json(repositories))
}

// API Documentation handlers
pub async fn get_api_docs<S: SourceHost>(_state: State<AppState<S>>) -> Html<String> {
    let html = r#"
<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Repository Branches API Documentation</title>
    <link rel="stylesheet" type="text/css" href="https://unpkg.com/swagger-ui-dist@5.9.0/swagger-ui.css" />
    <style>
        body {
            margin: 0;
            background: #fafafa;
        }
    </style>
</head>
<body>
    <div id="swagger-ui"></div>
    <script src="https://unpkg.com/swagger-ui-dist@5.9.0/swagger-ui-bundle.js"></script>
    <script>
        window.onload = function() {
            SwaggerUIBundle({
                url: '/docs/openapi.json',
                dom_id: '#swagger-ui',
                deepLinking: true
            });
        };
    </script>
</body>
</html>
"#;
    Html(html.to_string())
}

pub async fn get_openapi_spec<S: SourceHost>(
    _state: State<AppState<S>>,
) -> Json<serde_json::Value> {
    let error_response = |description: &str| {
        serde_json::json!({
            "description": description,
            "content": {
                "application/json": {
                    "schema": { "$ref": "#/components/schemas/ErrorMessage" }
                }
            }
        })
    };

    let spec = serde_json::json!({
        "openapi": "3.0.3",
        "info": {
            "title": "Repository Branches API",
            "version": env!("CARGO_PKG_VERSION"),
            "description": "Lists a user's non-fork repositories on the upstream source host, with every branch and its last commit SHA."
        },
        "servers": [
            {
                "url": "/",
                "description": "Current server"
            }
        ],
        "paths": {
            "/health": {
                "get": {
                    "summary": "Health check",
                    "responses": {
                        "200": {
                            "description": "Service is up",
                            "content": {
                                "application/json": {
                                    "schema": {
                                        "type": "object",
                                        "properties": {
                                            "status": { "type": "string" },
                                            "timestamp": { "type": "string", "format": "date-time" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            },
            "/repositories": {
                "get": {
                    "summary": "List non-fork repositories of a user with their branches",
                    "parameters": [
                        {
                            "name": "username",
                            "in": "query",
                            "required": true,
                            "schema": { "type": "string" }
                        },
                        {
                            "name": "Accept",
                            "in": "header",
                            "required": true,
                            "description": "Must be exactly application/json",
                            "schema": { "type": "string", "enum": ["application/json"] }
                        }
                    ],
                    "responses": {
                        "200": {
                            "description": "Repositories in upstream order",
                            "content": {
                                "application/json": {
                                    "schema": {
                                        "type": "array",
                                        "items": { "$ref": "#/components/schemas/Repository" }
                                    }
                                }
                            }
                        },
                        "400": error_response("Missing username or Accept header"),
                        "404": error_response("User not found"),
                        "406": error_response("Accept header is not application/json"),
                        "500": error_response("Upstream failure")
                    }
                }
            }
        },
        "components": {
            "schemas": {
                "Branch": {
                    "type": "object",
                    "required": ["branchName", "lastCommitSha"],
                    "properties": {
                        "branchName": { "type": "string" },
                        "lastCommitSha": { "type": "string" }
                    }
                },
                "Repository": {
                    "type": "object",
                    "required": ["repositoryName", "ownerLogin", "branches"],
                    "properties": {
                        "repositoryName": { "type": "string" },
                        "ownerLogin": { "type": "string" },
                        "branches": {
                            "type": "array",
                            "items": { "$ref": "#/components/schemas/Branch" }
                        }
                    }
                },
                "ErrorMessage": {
                    "type": "object",
                    "required": ["status", "message"],
                    "properties": {
                        "status": { "type": "integer" },
                        "message": { "type": "string" }
                    }
                }
            }
        }
    });

    Json(spec)
}
