//! Purchase history of the connected wallet

use leptos::prelude::*;
use leptos::task::spawn_local;

use shared::catalog::Product;
use shared::config::app_config;
use shared::dto::PurchaseRecord;
use shared::payment::PurchaseProgress;

use crate::services::store::{fetch_purchases, record_purchase, StoreError};
use crate::state::wallet::WalletContext;

#[derive(Clone, Copy)]
pub struct PurchasesContext {
    /// Newest first.
    pub records: RwSignal<Vec<PurchaseRecord>>,
    pub loading: RwSignal<bool>,
    address: Memo<Option<String>>,
}

impl PurchasesContext {
    pub fn progress(&self, product: &Product) -> PurchaseProgress {
        self.records.with(|records| PurchaseProgress::from_records(product, records))
    }

    /// Persist a payment. Without a backend it is kept for this page session only.
    pub async fn record(&self, record: PurchaseRecord) -> Result<(), StoreError> {
        let stored = match &app_config().backend {
            Some(backend) => record_purchase(backend, &record).await?,
            None => record,
        };
        self.records.update(|list| list.insert(0, stored));
        Ok(())
    }

    fn reload(&self, address: Option<String>) {
        self.records.set(Vec::new());
        self.loading.set(false);
        let (Some(address), Some(backend)) = (address, app_config().backend.as_ref()) else {
            return;
        };

        let this = *self;
        this.loading.set(true);
        spawn_local(async move {
            let result = fetch_purchases(backend, &address).await;
            // Drop results for an account that is no longer connected.
            if this.address.get_untracked().as_deref() != Some(address.as_str()) {
                return;
            }
            match result {
                Ok(records) => {
                    log::debug!("Loaded {} purchase records", records.len());
                    this.records.set(records);
                }
                Err(e) => log::warn!("Failed to load purchase history: {}", e),
            }
            this.loading.set(false);
        });
    }
}

pub fn provide_purchases_context(wallet: WalletContext) -> PurchasesContext {
    let context = PurchasesContext {
        records: RwSignal::new(Vec::new()),
        loading: RwSignal::new(false),
        address: Memo::new(move |_| wallet.address()),
    };
    provide_context(context);

    Effect::new(move |_| {
        let address = context.address.get();
        context.reload(address);
    });

    context
}

pub fn use_purchases() -> PurchasesContext {
    expect_context::<PurchasesContext>()
}
