use crate::core::Config;
use crate::db::DbService;
use crate::db::repository::MemberRepository;
use crate::utils::AppResult;

/// Server state - shared by every request handler
///
/// Cloning is cheap: the repository carries an `Arc`-backed SurrealDB handle.
/// Handlers receive the repository instead of a raw store handle, so tests
/// can build the state against a `mem://` instance.
#[derive(Clone, Debug)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// Member repository over the shared store connection
    pub members: MemberRepository,
}

impl ServerState {
    /// Connect to the store and assemble the shared state.
    ///
    /// A connection failure here is fatal for the process; there is nothing
    /// the service can do without its store.
    pub async fn initialize(config: &Config) -> AppResult<Self> {
        let db_service = DbService::new(&config.database_url).await?;
        let members = MemberRepository::new(db_service.db, config.capacity);

        Ok(Self {
            config: config.clone(),
            members,
        })
    }
}
