use std::sync::Arc;

use laundry_desk::app_system::{setup_tracing, LaundrySystem, Settings};
use laundry_desk::forms::OrderForm;
use laundry_desk::interaction::LogInteraction;
use laundry_desk::views::{format_rupiah, service_sections, OrderFilter};
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    let settings = Settings::load().map_err(|e| e.to_string())?;
    setup_tracing(&settings.logging);

    info!(mode = ?settings.remote.mode, "Starting laundry desk");

    let remote = settings.remote.connect().await.map_err(|e| e.to_string())?;
    let interaction = Arc::new(LogInteraction::new(settings.interaction.auto_confirm));
    let system = LaundrySystem::new(settings.store.queue_depth, remote, interaction);

    // Price list
    let span = tracing::info_span!("price_list");
    async {
        if system.service_client.fetch_services().await.is_err() {
            return;
        }
        let services = system.service_client.items();
        for section in service_sections(&services) {
            info!(category = section.category, "Section");
            for service in section.services {
                info!(
                    name = %service.name,
                    standard = %format_rupiah(service.price_standard),
                    express = %format_rupiah(service.price_express),
                    "Service"
                );
            }
        }
    }
    .instrument(span)
    .await;

    // Walk one order through its life
    let span = tracing::info_span!("order_walkthrough");
    let walkthrough = async {
        let form = OrderForm::by_weight("Rina", "4.5");
        let draft = form.to_draft().map_err(|e| e.to_string())?;
        info!(total = %format_rupiah(draft.price), "Submitting order");

        let id = system.order_client.add_order(draft).await.map_err(|e| e.to_string())?;
        system.order_client.advance_order_status(id).await.map_err(|e| e.to_string())?;
        system.order_client.toggle_payment_status(id).await.map_err(|e| e.to_string())?;
        Ok::<_, String>(id)
    }
    .instrument(span)
    .await;

    match walkthrough {
        Ok(id) => info!(order_id = id, "Order processed successfully"),
        Err(e) => error!(error = %e, "Order walkthrough failed"),
    }

    let orders = system.order_client.items();
    for order in OrderFilter::default().apply(&orders) {
        info!(
            order_id = order.id,
            customer = %order.customer_name,
            status = order.work_status.as_str(),
            payment = order.payment_status.as_str(),
            price = %format_rupiah(order.price),
            "Order"
        );
    }

    system.shutdown().await?;

    info!("Laundry desk finished");
    Ok(())
}
