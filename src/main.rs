use anyhow::Result;
use clap::Parser;

use pathsearch::api;
use pathsearch::common::graph_file;
use pathsearch::config::Config;
use pathsearch::core::error::ToPublicError;
use pathsearch::services::SearchService;
use pathsearch::utils::logging;

#[derive(Parser)]
#[clap(version = "0.1.0", author = "PathSearch Contributors")]
enum Cli {
    /// 启动 HTTP 搜索服务
    Serve {
        #[clap(short, long, default_value = "config.toml")]
        config: String,
    },
    /// 在图文件上执行一次搜索并输出 JSON 结果
    Search {
        /// 包含 NODE_COORDS / EDGES 段的图文件
        #[clap(short, long)]
        graph: String,
        #[clap(short, long)]
        start: String,
        #[clap(short = 'e', long)]
        goal: String,
        /// BFS、DFS、DLS、IDDFS、Uniform-Cost、Greedy 或 A*
        #[clap(short, long)]
        algorithm: String,
        /// DLS 的深度限制（DLS 必填，其他算法忽略）
        #[clap(short, long)]
        limit: Option<usize>,
        #[clap(short, long)]
        config: Option<String>,
        #[clap(long, default_value = "warn")]
        log_level: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli {
        Cli::Serve { config } => {
            api::start_service(config).await?;
        }
        Cli::Search {
            graph,
            start,
            goal,
            algorithm,
            limit,
            config,
            log_level,
        } => {
            if let Err(e) = logging::init_stderr(&log_level) {
                eprintln!("Failed to initialize logging: {}", e);
            }

            let config = match config {
                Some(path) => Config::load(&path)?,
                None => Config::default(),
            };

            let request =
                graph_file::load_graph_file(&graph)?.into_request(start, goal, algorithm, limit);
            let service = SearchService::new(config.search);

            let output = match service.run(&request) {
                Ok(outcome) => outcome.to_json(),
                Err(e) => {
                    let public = e.to_public_error();
                    serde_json::json!({
                        "error": public.message,
                        "code": public.code.as_i32(),
                    })
                }
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
            logging::shutdown();
        }
    }

    Ok(())
}
