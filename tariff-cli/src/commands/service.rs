//! Service command handlers
//!
//! Each handler drives the catalog editor through the same events a form
//! would: field changes, submit, edit selection and delete.

use anyhow::{Context, Result, anyhow};
use colored::*;
use tariff_core::domain::{Field, ServiceRecord};
use tariff_core::validation::FieldErrors;
use tariff_editor::{ServiceRow, SubmitError, SubmitOutcome};

use super::Editor;
use crate::id_resolver::resolve_service_id;
use crate::types::ServiceRef;

/// Add a new service
pub fn add_service(
    editor: &mut Editor<'_>,
    name: String,
    description: String,
    price: String,
) -> Result<()> {
    editor.set_field(Field::Name, name);
    editor.set_field(Field::Description, description);
    editor.set_field(Field::Price, price);

    let outcome = submit(editor)?;
    print_outcome(&outcome);

    Ok(())
}

/// List all services
pub fn list_services(editor: &Editor<'_>) -> Result<()> {
    let rows = editor.rows();

    if rows.is_empty() {
        println!("{}", "No services found.".yellow());
    } else {
        println!("{}", format!("Found {} service(s):", rows.len()).bold());
        println!();
        for row in &rows {
            print_service_row(row);
        }
    }

    Ok(())
}

/// Show a single service
pub fn show_service(editor: &Editor<'_>, service: &str) -> Result<()> {
    let id = resolve_service_id(editor.store().records(), &ServiceRef::parse(service))?;
    let record = editor
        .store()
        .get(id)
        .ok_or_else(|| anyhow!("Service not found: {}", id))?;

    print_service_details(record);

    Ok(())
}

/// Change the given fields of an existing service
pub fn edit_service(
    editor: &mut Editor<'_>,
    service: &str,
    name: Option<String>,
    description: Option<String>,
    price: Option<String>,
) -> Result<()> {
    if name.is_none() && description.is_none() && price.is_none() {
        anyhow::bail!("Nothing to change: pass --name, --description or --price");
    }

    let id = resolve_service_id(editor.store().records(), &ServiceRef::parse(service))?;
    editor
        .select_for_edit(id)
        .with_context(|| format!("Cannot edit service {}", id))?;

    let changes = [
        (Field::Name, name),
        (Field::Description, description),
        (Field::Price, price),
    ];
    for (field, value) in changes {
        if let Some(value) = value {
            editor.set_field(field, value);
        }
    }

    let outcome = submit(editor)?;
    print_outcome(&outcome);

    Ok(())
}

/// Delete a service
pub fn delete_service(editor: &mut Editor<'_>, service: &str) -> Result<()> {
    let id = resolve_service_id(editor.store().records(), &ServiceRef::parse(service))?;

    if editor.delete(id).context("Failed to delete service")? {
        println!(
            "{}",
            format!("✓ Service {} deleted successfully!", id).green().bold()
        );
    } else {
        println!("{}", format!("No service {}; nothing deleted.", id).yellow());
    }

    Ok(())
}

/// Submit the form, printing field errors if it is rejected
fn submit(editor: &mut Editor<'_>) -> Result<SubmitOutcome> {
    match editor.submit() {
        Ok(outcome) => Ok(outcome),
        Err(SubmitError::Invalid(errors)) => {
            print_field_errors(&errors);
            Err(anyhow!(
                "Service was not saved: {} invalid field(s)",
                errors.len()
            ))
        }
        Err(e) => Err(e).context("Failed to save service"),
    }
}

fn print_outcome(outcome: &SubmitOutcome) {
    match outcome {
        SubmitOutcome::Created(record) => {
            println!("{}", "✓ Service created successfully!".green().bold());
            print_record_fields(record);
        }
        SubmitOutcome::Updated(record) => {
            println!("{}", "✓ Service updated successfully!".green().bold());
            print_record_fields(record);
        }
        SubmitOutcome::Discarded(id) => {
            println!(
                "{}",
                format!("Service {} no longer exists; edit discarded.", id).yellow()
            );
        }
    }
}

fn print_record_fields(record: &ServiceRecord) {
    println!("  ID:          {}", record.id.to_string().cyan());
    println!("  Name:        {}", record.name.bold());
    println!("  Description: {}", record.description);
    println!("  Price:       {}", record.price.formatted());
}

fn print_field_errors(errors: &FieldErrors) {
    println!("{}", "✗ Please fix the following:".red().bold());
    for (field, message) in errors.iter() {
        println!("  {:<12} {}", format!("{}:", field).dimmed(), message.red());
    }
}

/// Print a service row
fn print_service_row(row: &ServiceRow) {
    println!(
        "  {} {}  {}",
        "▸".cyan(),
        row.name.bold(),
        row.price.green()
    );
    println!("    ID:          {}", row.id.to_string().dimmed());
    println!("    Description: {}", row.description.dimmed());
    println!();
}

/// Print detailed service information
fn print_service_details(record: &ServiceRecord) {
    println!("{}", "Service Details:".bold());
    print_record_fields(record);
}
