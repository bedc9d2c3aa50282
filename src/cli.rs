use clap::{ArgAction, Parser, ValueEnum};
use database::{
    consts::consts::DEFAULT_COLLECTION,
    database::options::{DatabaseOptions, StorageEngine},
};

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq)]
pub enum EngineArg {
    /// MongoDB, requires a connection string
    Mongo,
    /// In-process, data is lost on exit
    Memory,
}

/// 📀 People API, a small CRUD server for people records backed by a document store
#[derive(Parser, Debug)]
pub struct Cli {
    /// Port the server will listen on
    #[clap(short, long, env = "PORT", default_value_t = 3001)]
    pub port: u16,

    /// Address the server will listen on
    #[clap(short, long, env = "ADDRESS", default_value = "0.0.0.0")]
    pub address: String,

    /// MongoDB connection string, e.g. mongodb://localhost:27017/people
    #[clap(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,

    /// Database to use, defaults to the one named in the connection string
    #[clap(long, env = "DATABASE_NAME")]
    pub database_name: Option<String>,

    #[clap(long, env = "PEOPLE_COLLECTION", default_value = DEFAULT_COLLECTION)]
    pub collection: String,

    #[clap(long, env = "STORAGE_ENGINE", value_enum, default_value_t = EngineArg::Mongo)]
    pub storage_engine: EngineArg,

    /// Log every HTTP request
    #[clap(long, env = "LOG_HTTP", action = ArgAction::Set, default_value_t = true)]
    pub log_http: bool,

    #[clap(long, env = "HTTP_WORKERS", default_value_t = 2)]
    pub http_workers: usize,
}

impl Cli {
    pub fn database_options(&self) -> DatabaseOptions {
        let storage_engine = match self.storage_engine {
            EngineArg::Mongo => StorageEngine::Mongo,
            EngineArg::Memory => StorageEngine::Memory,
        };

        DatabaseOptions::default()
            .set_storage_engine(storage_engine)
            .set_database_url(self.database_url.clone())
            .set_database_name(self.database_name.clone())
            .set_collection(self.collection.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Env-backed defaults are not asserted here, the test environment may set PORT and friends
    #[test]
    fn flags_override_everything() {
        let cli = Cli::try_parse_from([
            "people-api",
            "--port",
            "8080",
            "--address",
            "127.0.0.1",
            "--database-url",
            "mongodb://localhost:27017/people",
            "--collection",
            "staff",
            "--storage-engine",
            "memory",
            "--log-http",
            "false",
        ])
        .unwrap();

        assert_eq!(cli.port, 8080);
        assert_eq!(cli.address, "127.0.0.1");
        assert_eq!(cli.storage_engine, EngineArg::Memory);
        assert!(!cli.log_http);

        let options = cli.database_options();

        assert_eq!(options.storage_engine, StorageEngine::Memory);
        assert_eq!(
            options.database_url.as_deref(),
            Some("mongodb://localhost:27017/people")
        );
        assert_eq!(options.collection, "staff");
    }

    #[test]
    fn rejects_unknown_storage_engine() {
        let result = Cli::try_parse_from(["people-api", "--storage-engine", "postgres"]);

        assert!(result.is_err());
    }

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;

        Cli::command().debug_assert();
    }
}
