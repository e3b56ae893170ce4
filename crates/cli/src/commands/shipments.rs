use std::path::{Path, PathBuf};

use anyhow::bail;
use cargas_core::{Searchable, ShipmentFilter, StatusVocabulary};
use cargas_domain::{
    CentauroShipment, CentauroStatusUpdate, DocumentFile, NikeShipment, NikeStatusUpdate, Receiver,
    StatusCode,
};
use cargas_infra::read_document;
use serde::Serialize;
use serde_json::Value;
use tracing::warn;

use crate::context::{AppContext, Backend};

/// Options of `update-status` beyond the shipment id.
pub struct StatusChange {
    pub code: String,
    pub note: Option<String>,
    pub receiver: Option<Vec<String>>,
    pub invoice_keys: Vec<String>,
    pub attachments: Vec<PathBuf>,
}

pub async fn list(
    ctx: &AppContext,
    search: Option<&str>,
    statuses: &[String],
) -> anyhow::Result<()> {
    let mut filter = ShipmentFilter::new();
    if let Some(term) = search {
        filter = filter.with_search(term);
    }
    for code in statuses {
        filter = filter.with_status(code.trim());
    }

    let vocabulary = ctx.vocabulary()?;
    match ctx.backend() {
        Backend::Nike => {
            let shipments = ctx.nike.list_shipments().await?;
            print_rows(&filter, &shipments, &vocabulary, nike_row);
        }
        Backend::Centauro => {
            let shipments = ctx.centauro.list_shipments().await?;
            print_rows(&filter, &shipments, &vocabulary, centauro_row);
        }
    }
    Ok(())
}

pub async fn show(ctx: &AppContext, id: &str) -> anyhow::Result<()> {
    let vocabulary = ctx.vocabulary()?;

    match ctx.backend() {
        Backend::Nike => {
            let shipment = ctx.nike.get_shipment(id).await?;
            print_detail(&shipment, &vocabulary)?;
        }
        Backend::Centauro => {
            let shipment = ctx.centauro.get_shipment(id).await?;
            print_detail(&shipment, &vocabulary)?;
        }
    }
    Ok(())
}

pub async fn update_status(
    ctx: &AppContext,
    id: &str,
    change: StatusChange,
) -> anyhow::Result<()> {
    let code = StatusCode::from(change.code.trim());

    let Some(descriptor) = ctx.vocabulary()?.lookup(&code) else {
        bail!("unknown status code {code} for {}", ctx.current().display_name);
    };
    let attachments = read_documents(&change.attachments).await?;
    let receiver = change.receiver.as_deref().and_then(|values| values.chunks_exact(3).last());

    let response = match ctx.backend() {
        Backend::Nike => {
            if !change.invoice_keys.is_empty() {
                warn!("--invoice-key is ignored for this integration");
            }
            let mut update = NikeStatusUpdate::new(&descriptor.code);
            if let Some(note) = &change.note {
                update = update.with_note(note);
            }
            if let Some([nome, cnpj_cpf, data_recebimento]) = receiver {
                update = update.with_receiver(Receiver {
                    nome: nome.clone(),
                    cnpj_cpf: cnpj_cpf.clone(),
                    data_recebimento: data_recebimento.clone(),
                });
            }
            ctx.nike.update_status(id, &update, attachments).await?
        }
        Backend::Centauro => {
            if change.note.is_some() || receiver.is_some() {
                warn!("--note and --receiver are ignored for this integration");
            }
            let update =
                CentauroStatusUpdate::new(&descriptor.code).with_invoice_keys(change.invoice_keys);
            ctx.centauro.update_status(id, &update, attachments).await?
        }
    };

    println!("Shipment {id} set to {} ({})", descriptor.code, descriptor.label);
    if !response.is_null() {
        println!("{}", serde_json::to_string_pretty(&response)?);
    }
    Ok(())
}

pub async fn upload(ctx: &AppContext, id: &str, paths: &[PathBuf]) -> anyhow::Result<()> {
    let files = read_documents(paths).await?;

    let (uploaded, rejected) = match ctx.backend() {
        Backend::Nike => {
            let outcome = ctx.nike.upload_documents(id, files).await?;
            if !outcome.response.sucesso {
                let message = outcome.response.mensagem.as_deref().unwrap_or("no message");
                bail!("upload rejected by server: {message}");
            }
            if let Some(key) = &outcome.response.chave {
                println!("CT-e key: {key}");
            }
            (outcome.uploaded, outcome.rejected)
        }
        Backend::Centauro => {
            let outcome = ctx.centauro.upload_documents(id, files).await?;
            (outcome.uploaded, outcome.rejected)
        }
    };

    println!("Uploaded {} file(s): {}", uploaded.len(), uploaded.join(", "));
    if !rejected.is_empty() {
        println!("Skipped (not .xml): {}", rejected.join(", "));
    }
    Ok(())
}

pub async fn tracking(ctx: &AppContext, id: &str) -> anyhow::Result<()> {

    if ctx.backend() != Backend::Centauro {
        bail!("tracking is not available for {}", ctx.current().display_name);
    }

    let vocabulary = ctx.vocabulary()?;
    let events = ctx.centauro.tracking_events(id).await?;
    for event in &events {
        let label = vocabulary.describe(&StatusCode::from(event.code.as_str())).label;
        let message = if event.message.is_empty() { label } else { event.message.as_str() };
        println!(
            "{:<20} {:>4}  {message}  {}",
            event.created_at,
            event.code,
            event.invoice_key.as_deref().unwrap_or("")
        );
    }
    println!("{} event(s)", events.len());
    Ok(())
}

async fn read_documents<P: AsRef<Path>>(
    paths: impl IntoIterator<Item = P>,
) -> anyhow::Result<Vec<DocumentFile>> {
    let mut files = Vec::new();
    for path in paths {
        files.push(read_document(path.as_ref()).await?);
    }
    Ok(files)
}

fn print_rows<S: Searchable>(
    filter: &ShipmentFilter,
    shipments: &[S],
    vocabulary: &StatusVocabulary,
    row: fn(&S) -> (String, String),
) {
    let matching = filter.apply(shipments);
    for shipment in &matching {
        let (id, summary) = row(shipment);
        let status = shipment.status_code().map_or_else(
            || "-".to_string(),
            |code| format!("{code} {}", vocabulary.describe(code).label),
        );
        println!("{id:<12} {status:<40} {summary}");
    }
    println!("{} of {} shipment(s)", matching.len(), shipments.len());
}

fn print_detail<S: Searchable + Serialize>(
    shipment: &S,
    vocabulary: &StatusVocabulary,
) -> anyhow::Result<()> {
    if let Some(code) = shipment.status_code() {
        let descriptor = vocabulary.describe(code);
        println!("Status: {code} {} [{}]", descriptor.label, descriptor.category);
    }
    let value: Value = serde_json::to_value(shipment)?;
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

fn nike_row(shipment: &NikeShipment) -> (String, String) {
    let party = |actor: Option<&cargas_domain::Actor>| {
        actor.and_then(|actor| actor.name.clone()).unwrap_or_else(|| "?".to_string())
    };
    let summary = format!(
        "{}  {} -> {}",
        shipment.external_ref.as_deref().unwrap_or("-"),
        party(shipment.rem.as_ref()),
        party(shipment.dest.as_ref())
    );
    (shipment.id.to_string(), summary)
}

fn centauro_row(shipment: &CentauroShipment) -> (String, String) {
    let city = |info: Option<&cargas_domain::CentauroCityInfo>| {
        info.and_then(|info| info.municipio.clone()).unwrap_or_else(|| "?".to_string())
    };
    let summary = format!(
        "{}  {} -> {}",
        shipment.external_id.as_deref().unwrap_or("-"),
        city(shipment.origin_city.as_ref()),
        city(shipment.destination_city.as_ref())
    );
    (shipment.id.clone(), summary)
}
