//! 文本图文件
//!
//! ```text
//! # comment
//! NODE_COORDS:
//! A: (0, 0)
//! B: (1.5, 2)
//! EDGES:
//! A-B: 2.5
//! B-C            # 权重默认为 1.0
//! ```
//!
//! 段落标题不区分大小写，结尾冒号可省略。

use std::fs;
use std::path::Path;

use crate::core::error::{SearchError, SearchResult};
use crate::core::graph::{parse_edge_label, Coordinates, DEFAULT_WEIGHT};
use crate::services::search::SearchRequest;

/// 从图文件读取的边与坐标
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GraphFile {
    pub edges: Vec<(String, f64)>,
    pub coordinates: Coordinates,
}

impl GraphFile {
    /// 把文件内容转换为查询请求
    ///
    /// # 参数
    /// - `start` / `goal`: 起点与终点
    /// - `algorithm`: 算法名
    /// - `limit`: DLS 深度限制
    pub fn into_request(
        self,
        start: impl Into<String>,
        goal: impl Into<String>,
        algorithm: impl Into<String>,
        limit: Option<usize>,
    ) -> SearchRequest {
        SearchRequest {
            edges: self.edges,
            coordinates: self.coordinates,
            start: start.into(),
            goal: goal.into(),
            algorithm: algorithm.into(),
            limit,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    None,
    Coords,
    Edges,
}

/// 读取并解析图文件
pub fn load_graph_file<P: AsRef<Path>>(path: P) -> SearchResult<GraphFile> {
    let content = fs::read_to_string(path)?;
    parse_graph_file(&content)
}

/// 解析图文件内容
///
/// # 返回
/// 解析结果；格式错误返回带行号的 `Parse` 错误
pub fn parse_graph_file(content: &str) -> SearchResult<GraphFile> {
    let mut graph_file = GraphFile::default();
    let mut section = Section::None;

    for (index, raw) in content.lines().enumerate() {
        let line_no = index + 1;
        let line = strip_comment(raw).trim();
        if line.is_empty() {
            continue;
        }

        match line.trim_end_matches(':').trim().to_uppercase().as_str() {
            "NODE_COORDS" => {
                section = Section::Coords;
                continue;
            }
            "EDGES" => {
                section = Section::Edges;
                continue;
            }
            _ => {}
        }

        match section {
            Section::Coords => {
                let (node, point) = parse_coordinate_line(line, line_no)?;
                graph_file.coordinates.insert(node, point);
            }
            Section::Edges => {
                graph_file.edges.push(parse_edge_line(line, line_no)?);
            }
            Section::None => {
                return Err(parse_error(
                    line_no,
                    "expected a NODE_COORDS or EDGES section header",
                ));
            }
        }
    }

    Ok(graph_file)
}

fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(at) => &line[..at],
        None => line,
    }
}

fn parse_coordinate_line(line: &str, line_no: usize) -> SearchResult<(String, (f64, f64))> {
    let (node, tuple) = line
        .split_once(':')
        .ok_or_else(|| parse_error(line_no, "expected 'NODE: (x, y)'"))?;

    let node = node.trim();
    if node.is_empty() {
        return Err(parse_error(line_no, "empty node name"));
    }

    let inner = tuple
        .trim()
        .trim_start_matches('(')
        .trim_end_matches(')');
    let (x, y) = inner
        .split_once(',')
        .ok_or_else(|| parse_error(line_no, "expected two comma-separated coordinates"))?;

    Ok((
        node.to_string(),
        (parse_number(x, line_no)?, parse_number(y, line_no)?),
    ))
}

fn parse_edge_line(line: &str, line_no: usize) -> SearchResult<(String, f64)> {
    let (label, weight) = match line.split_once(':') {
        Some((label, weight)) => (label.trim(), parse_number(weight, line_no)?),
        None => (line, DEFAULT_WEIGHT),
    };

    let (a, b) = parse_edge_label(label)
        .ok_or_else(|| parse_error(line_no, format!("malformed edge '{}'", label)))?;

    Ok((format!("{}-{}", a, b), weight))
}

fn parse_number(text: &str, line_no: usize) -> SearchResult<f64> {
    let text = text.trim();
    text.parse::<f64>()
        .map_err(|_| parse_error(line_no, format!("invalid number '{}'", text)))
}

fn parse_error(line: usize, message: impl Into<String>) -> SearchError {
    SearchError::Parse {
        line,
        message: message.into(),
    }
}
