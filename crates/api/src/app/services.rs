//! Service wiring: in-memory stores behind the infra services.

use std::sync::Arc;

use arbor_infra::{
    AppConfig, SaleOrderReportService,
    batch::{BatchRunner, BatchStore, InMemoryBatchStore, PasswordChangeBatchService},
    password::{BcryptPasswordHasher, PasswordError, RandomPasswordGenerator},
    repository::{
        InMemoryPasswordChangeBatchRepository, InMemorySaleOrderRepository,
        InMemorySupplyChainStore, InMemoryUserRepository,
    },
    session::InMemorySessionStore,
};
use arbor_sales::SaleOrderReport;
use arbor_supplychain::SupplychainReportEnricher;

/// Services shared by every handler.
pub struct AppServices {
    pub password_change: PasswordChangeBatchService,
    pub batches: Arc<dyn BatchStore>,
    pub reports: SaleOrderReportService,
}

/// Concrete stores behind [`AppServices`], for seeding data.
#[derive(Debug, Clone)]
pub struct InMemoryStores {
    pub users: Arc<InMemoryUserRepository>,
    pub password_change_batches: Arc<InMemoryPasswordChangeBatchRepository>,
    pub sessions: Arc<InMemorySessionStore>,
    pub batches: Arc<InMemoryBatchStore>,
    pub sale_orders: Arc<InMemorySaleOrderRepository>,
    pub supply_chain: Arc<InMemorySupplyChainStore>,
}

impl InMemoryStores {
    pub fn new() -> Self {
        Self {
            users: InMemoryUserRepository::arc(),
            password_change_batches: Arc::new(InMemoryPasswordChangeBatchRepository::new()),
            sessions: Arc::new(InMemorySessionStore::new()),
            batches: InMemoryBatchStore::arc(),
            sale_orders: Arc::new(InMemorySaleOrderRepository::new()),
            supply_chain: Arc::new(InMemorySupplyChainStore::new()),
        }
    }
}

impl Default for InMemoryStores {
    fn default() -> Self {
        Self::new()
    }
}

/// Wire services over the given stores.
pub fn build_services(
    config: &AppConfig,
    stores: &InMemoryStores,
) -> Result<AppServices, PasswordError> {
    let generator = RandomPasswordGenerator::new(config.password_length)?;

    let password_change = PasswordChangeBatchService::new(
        stores.users.clone(),
        stores.password_change_batches.clone(),
        stores.sessions.clone(),
        Arc::new(BcryptPasswordHasher::new(config.bcrypt_cost)),
        Arc::new(generator),
        BatchRunner::new(stores.batches.clone()),
    );

    let report = SaleOrderReport::new().with_enricher(Arc::new(SupplychainReportEnricher::new(
        stores.supply_chain.clone(),
    )));
    let reports = SaleOrderReportService::new(stores.sale_orders.clone(), report, config.app_base);

    Ok(AppServices {
        password_change,
        batches: stores.batches.clone(),
        reports,
    })
}
