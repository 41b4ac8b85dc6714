use std::sync::Arc;

use logger::{TracingLogger, TracingNotifier};
use storefront::client::StorefrontClient;
use storefront::product_catalog::ProductCatalogHttp;
use storefront::stock_service::StockServiceHttp;

use business::application::cart::add_product::AddProductUseCaseImpl;
use business::application::cart::get_cart::GetCartUseCaseImpl;
use business::application::cart::remove_product::RemoveProductUseCaseImpl;
use business::application::cart::stock_check::StockChecker;
use business::application::cart::store::CartStore;
use business::application::cart::update_amount::UpdateProductAmountUseCaseImpl;
use business::domain::logger::Logger;
use business::domain::notifier::Notifier;

use crate::config::app_config::AppConfig;
use crate::config::storage_config::init_storage;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub cart_api: crate::api::cart::routes::CartApi,
}

impl DependencyContainer {
    pub async fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger);
        let notifier: Arc<dyn Notifier> = Arc::new(TracingNotifier);
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let storage = init_storage(&config.storage).await?;
        let storefront_client = StorefrontClient::new(
            config.storefront.base_url.clone(),
            config.storefront.timeout,
        );
        let stock_service = Arc::new(StockServiceHttp::new(storefront_client.clone()));
        let catalog = Arc::new(ProductCatalogHttp::new(storefront_client));

        // Cart state, restored from the previous session
        let store = Arc::new(CartStore::load(storage, logger.clone()).await?);
        let stock_checker = Arc::new(StockChecker {
            stock_service,
            notifier: notifier.clone(),
            logger: logger.clone(),
        });

        // Cart use cases
        let get_cart_use_case = Arc::new(GetCartUseCaseImpl {
            store: store.clone(),
            logger: logger.clone(),
        });
        let add_product_use_case = Arc::new(AddProductUseCaseImpl {
            store: store.clone(),
            catalog,
            stock_checker: stock_checker.clone(),
            notifier: notifier.clone(),
            logger: logger.clone(),
        });
        let remove_product_use_case = Arc::new(RemoveProductUseCaseImpl {
            store: store.clone(),
            notifier: notifier.clone(),
            logger: logger.clone(),
        });
        let update_amount_use_case = Arc::new(UpdateProductAmountUseCaseImpl {
            store,
            stock_checker,
            notifier,
            logger,
        });

        let cart_api = crate::api::cart::routes::CartApi::new(
            get_cart_use_case,
            add_product_use_case,
            remove_product_use_case,
            update_amount_use_case,
        );

        Ok(Self {
            health_api,
            cart_api,
        })
    }
}
