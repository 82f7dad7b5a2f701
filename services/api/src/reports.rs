use crate::cli::{OccupancyReportArgs, PublishArgs, QuoteArgs};
use himyatra::config::AppConfig;
use himyatra::error::AppError;
use himyatra::hotels::{HotelPricingService, JsonFileHotelRepository};
use himyatra::occupancy::{BoardFilter, OccupancyBoard, RoomTypeView};
use himyatra::pricing::{PriceBreakdown, RateCard, RoomQuote};
use std::sync::Arc;

pub(crate) fn run_pricing_quote(args: QuoteArgs) -> Result<(), AppError> {
    let QuoteArgs {
        pricing,
        base_price,
        room_type,
    } = args;
    let settings = pricing.settings();

    if let Some(base_price) = base_price {
        let breakdown = settings.with_base_price(base_price).breakdown();
        render_breakdown("Custom rate", &breakdown);
        return Ok(());
    }

    let card = RateCard::standard();
    let quotes = match room_type {
        Some(name) => vec![card.quote(&name, &settings)?],
        None => card.quotes(&settings),
    };

    println!("Room rate quotes");
    render_quotes(&quotes);
    Ok(())
}

pub(crate) fn run_pricing_publish(args: PublishArgs) -> Result<(), AppError> {
    let PublishArgs {
        pricing,
        data,
        dry_run,
    } = args;
    let settings = pricing.settings();

    let card = RateCard::standard();
    let update = card.price_update(&settings)?;
    println!("Prices to publish");
    render_quotes(&card.quotes(&settings));

    if dry_run {
        println!("\nDry run: hotel data left unchanged");
        return Ok(());
    }

    let path = match data {
        Some(path) => path,
        None => AppConfig::load()?.storage.hotel_data_path,
    };
    let service = HotelPricingService::new(Arc::new(JsonFileHotelRepository::new(&path)));
    let receipt = service.update_prices(&update)?;

    println!(
        "\n{} ({} room offerings in {})",
        receipt.message,
        receipt.offerings_updated,
        path.display()
    );
    println!(
        "Deluxe: ₹{}, Premium Suite: ₹{}",
        receipt.updated_prices.deluxe, receipt.updated_prices.premium_suite
    );
    Ok(())
}

pub(crate) fn run_occupancy_report(args: OccupancyReportArgs) -> Result<(), AppError> {
    let OccupancyReportArgs {
        status,
        room_type,
        add_room_types,
        toggles,
        list_rooms,
    } = args;

    let mut board = OccupancyBoard::standard();
    for spec in add_room_types {
        board.add_room_type(&spec.name, spec.total)?;
    }
    for toggle in toggles {
        let outcome = board.advance_room(&toggle.room_type, toggle.number)?;
        println!(
            "Toggled {} room {}: {} -> {}",
            outcome.room_type,
            outcome.room.number,
            outcome.previous.label(),
            outcome.room.status.label()
        );
    }

    let views = board.filtered(&BoardFilter { status, room_type });
    render_occupancy(&views, status.map(|status| status.label()), list_rooms);
    Ok(())
}

fn render_breakdown(label: &str, breakdown: &PriceBreakdown) {
    println!("{}: ₹{}", label, breakdown.final_price);
    println!("  {}", breakdown.explanation);
}

fn render_quotes(quotes: &[RoomQuote]) {
    for quote in quotes {
        println!(
            "- {}: ₹{} ({})",
            quote.name, quote.breakdown.final_price, quote.breakdown.explanation
        );
    }
}

fn render_occupancy(views: &[RoomTypeView], status_label: Option<&str>, list_rooms: bool) {
    if views.is_empty() {
        println!("\nNo matching room types");
        return;
    }

    println!("\nOccupancy by room type");
    for view in views {
        let summary = &view.summary;
        println!(
            "- {}: {} occupied, {} vacant, {} maintenance, {} cleaning of {} | occupancy {}% | utilization {}%",
            view.name,
            summary.occupied,
            summary.vacant,
            summary.maintenance,
            summary.cleaning,
            summary.total,
            summary.occupancy_rate,
            summary.utilization_rate
        );

        if list_rooms || status_label.is_some() {
            if view.rooms.is_empty() {
                println!("    (no {} rooms)", status_label.unwrap_or("listed").to_lowercase());
            }
            for room in &view.rooms {
                println!("    #{:<3} {:<18} {}", room.number, room.id, room.status.label());
            }
        }
    }
}
