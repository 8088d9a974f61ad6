use std::time::Instant;

use anyhow::{Context, Result, anyhow, bail};
use tracing::{debug, info, info_span};

use inv_cli::logging::redact_value;
use inv_cli::source::RecordSource;
use inv_model::{DisplayOptions, NullableString};
use inv_normalize::{InventoryCard, VendorCard, VendorForm, decode_enum};

use crate::cli::{DecodeArgs, UpdateVendorArgs, VendorArgs};

/// Outcome of `update-vendor`.
pub enum UpdateOutcome {
    /// Request body that would have been sent.
    DryRun(String),
    /// Server acknowledgement message.
    Saved(String),
}

pub fn run_vendors(source: &RecordSource, options: &DisplayOptions) -> Result<Vec<VendorCard>> {
    let span = info_span!("vendors");
    let _guard = span.enter();
    let start = Instant::now();

    let vendors = source.vendors().context("load vendors")?;
    let cards: Vec<VendorCard> = vendors
        .iter()
        .map(|vendor| VendorCard::from_vendor(vendor, options))
        .collect();

    info!(
        count = cards.len(),
        duration_ms = start.elapsed().as_millis(),
        "vendors normalized"
    );
    Ok(cards)
}

pub fn run_inventory(
    source: &RecordSource,
    options: &DisplayOptions,
) -> Result<Vec<InventoryCard>> {
    let span = info_span!("inventory");
    let _guard = span.enter();
    let start = Instant::now();

    let items = source.inventory().context("load inventory")?;
    let cards: Vec<InventoryCard> = items
        .iter()
        .map(|item| InventoryCard::from_item(item, options))
        .collect();

    info!(
        count = cards.len(),
        duration_ms = start.elapsed().as_millis(),
        "inventory normalized"
    );
    Ok(cards)
}

pub fn run_vendor(
    source: &RecordSource,
    options: &DisplayOptions,
    args: &VendorArgs,
) -> Result<VendorCard> {
    let span = info_span!("vendor", vendor_id = %args.vendor_id);
    let _guard = span.enter();

    let vendor = source
        .vendor(&args.vendor_id)
        .with_context(|| format!("load vendor {}", args.vendor_id))?;
    let card = VendorCard::from_vendor(&vendor, options);
    debug!(title = redact_value(&card.title), "vendor loaded");
    Ok(card)
}

/// Loads the vendor, applies the requested edits on top of the pre-filled
/// form and saves it under the session user.
pub fn run_update_vendor(source: &RecordSource, args: &UpdateVendorArgs) -> Result<UpdateOutcome> {
    let span = info_span!("update_vendor", vendor_id = %args.vendor_id);
    let _guard = span.enter();

    let client = source
        .client()
        .ok_or_else(|| anyhow!("update-vendor talks to the backend and cannot use --input"))?;
    let user = client
        .session()
        .user()
        .filter(|user| !user.trim().is_empty())
        .ok_or_else(|| anyhow!("update-vendor needs a signed-in user; pass --token and --user"))?
        .to_string();

    let vendor = source
        .vendor(&args.vendor_id)
        .with_context(|| format!("load vendor {}", args.vendor_id))?;
    let mut form = VendorForm::from_vendor(&vendor);
    if let Some(name) = &args.name {
        form.nama_vendor = name.clone();
    }
    if let Some(address) = &args.address {
        form.alamat = address.clone();
    }
    if let Some(status) = args.status {
        form.status = status.into();
    }

    let update = form.into_update(user);
    update.validate().context("vendor form is incomplete")?;
    debug!(
        name = redact_value(&update.nama_vendor),
        status = %update.status,
        "vendor form ready"
    );

    if args.dry_run {
        let body = serde_json::to_string_pretty(&update).context("serialize vendor update")?;
        return Ok(UpdateOutcome::DryRun(body));
    }

    let message = client
        .update_vendor(&args.vendor_id, update)
        .with_context(|| format!("save vendor {}", args.vendor_id))?;
    info!("vendor saved");
    Ok(UpdateOutcome::Saved(message))
}

pub fn run_decode(args: &DecodeArgs) -> Result<String> {
    if args.value.is_empty() {
        bail!("nothing to decode");
    }
    let value = NullableString::from(args.value.as_str());
    Ok(decode_enum(Some(&value)))
}
