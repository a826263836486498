use std::fmt;

use axum::{
    extract::{rejection::JsonRejection, Json, State},
    response::Json as JsonResponse,
};
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use tokio::task;

use crate::api::server::http::{error::HttpError, state::AppState};
use crate::core::error::ErrorCode;
use crate::core::graph::{Coordinates, DEFAULT_WEIGHT};
use crate::services::search::SearchRequest;

/// `POST /search` 请求体
///
/// 同时接受西班牙语字段名（`nodos`、`aristas` 等）作为别名。
#[derive(Debug, Deserialize)]
pub struct SearchBody {
    #[serde(default, alias = "nodos")]
    pub nodes: Coordinates,
    #[serde(alias = "aristas", deserialize_with = "edges_in_order")]
    pub edges: Vec<(String, f64)>,
    #[serde(alias = "inicio")]
    pub start: String,
    #[serde(alias = "meta")]
    pub goal: String,
    #[serde(alias = "algoritmo")]
    pub algorithm: String,
    #[serde(default)]
    pub limit: Option<usize>,
}

impl From<SearchBody> for SearchRequest {
    fn from(body: SearchBody) -> Self {
        SearchRequest {
            edges: body.edges,
            coordinates: body.nodes,
            start: body.start,
            goal: body.goal,
            algorithm: body.algorithm,
            limit: body.limit,
        }
    }
}

/// 按键顺序读取边对象，邻居顺序决定平局顺序。`null` 权重表示默认权重。
fn edges_in_order<'de, D>(deserializer: D) -> Result<Vec<(String, f64)>, D::Error>
where
    D: Deserializer<'de>,
{
    struct EdgeVisitor;

    impl<'de> Visitor<'de> for EdgeVisitor {
        type Value = Vec<(String, f64)>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a map of \"A-B\" edge labels to weights")
        }

        fn visit_map<M: MapAccess<'de>>(self, mut map: M) -> Result<Self::Value, M::Error> {
            let mut edges = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((label, weight)) = map.next_entry::<String, Option<f64>>()? {
                edges.push((label, weight.unwrap_or(DEFAULT_WEIGHT)));
            }
            Ok(edges)
        }
    }

    deserializer.deserialize_map(EdgeVisitor)
}

/// 执行一次搜索
///
/// # 返回
/// 找到路径时返回 `{path, cost}`，否则返回 `{message}`
pub async fn execute(
    State(state): State<AppState>,
    payload: Result<Json<SearchBody>, JsonRejection>,
) -> Result<JsonResponse<serde_json::Value>, HttpError> {
    let Json(body) = payload.map_err(|rejection| HttpError::BadRequest {
        code: ErrorCode::ParseError,
        message: rejection.body_text(),
    })?;
    let request = SearchRequest::from(body);

    let outcome = task::spawn_blocking(move || state.service.run(&request))
        .await
        .map_err(|e| HttpError::InternalError(format!("search task failed: {}", e)))??;

    Ok(JsonResponse(outcome.to_json()))
}
