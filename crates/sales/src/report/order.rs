//! Order header record.

use arbor_core::Record;

use crate::order::SaleOrder;

pub fn order_record(order: &SaleOrder) -> Record {
    let mut r = Record::new();

    r.put("id", order.id.get());
    r.put("saleOrderSeq", &order.sale_order_seq);
    r.put_opt("invoicingAddress", order.main_invoicing_address_str.as_deref());
    r.put_opt("deliveryAddress", order.delivery_address_str.as_deref());
    r.put("ex_tax_total", order.ex_tax_total);
    r.put("tax_total", order.tax_total);
    r.put("in_tax_total", order.in_tax_total);
    r.put_opt("external_reference", order.external_reference.as_deref());
    r.put_opt("description", order.description.as_deref());
    r.put_opt("deliveryCondition", order.delivery_condition.as_deref());
    r.put("hideDiscount", order.hide_discount);
    r.put("status_select", order.status.select_value());
    r.put_opt("specific_notes", order.specific_notes.as_deref());
    r.put("versionNumber", order.version_number);
    r.put_opt("periodicity_type_select", order.periodicity_type_select);
    r.put_opt("number_of_periods", order.number_of_periods);
    r.put_opt("subscription_text", order.subscription_text.as_deref());
    r.put("in_ati", order.in_ati);
    r.put_opt("proforma_comments", order.proforma_comments.as_deref());

    r.put_opt("CreationDate", order.creation_date);
    r.put_opt("deliveryDate", order.delivery_date);
    r.put_opt("end_of_validity_date", order.end_of_validity_date);

    put_salesperson(order, &mut r);
    put_company(order, &mut r);
    put_partners(order, &mut r);

    if let Some(bank_details) = &order.company_bank_details {
        r.put("iban", &bank_details.iban);
        let bank_address = bank_details
            .bank_address
            .as_ref()
            .and_then(|a| a.address.as_deref());
        r.put_opt("bank_address", bank_address);
        r.put("bic", &bank_details.bank.code);
    }

    r.put("CurrencyCode", &order.currency.code);

    if let Some(settings) = order.effective_printing_settings() {
        r.put_opt("header", settings.pdf_header.as_deref());
        r.put_opt("footer", settings.pdf_footer.as_deref());
        r.put("logoPosition", settings.logo_position.select_value());
    }

    r.put_opt("durationName", order.duration.as_ref().map(|d| d.name.as_str()));

    r
}

fn put_salesperson(order: &SaleOrder, r: &mut Record) {
    let Some(salesperson) = &order.salesperson else {
        return;
    };
    r.put_opt(
        "salesperson_signature_path",
        salesperson
            .electronic_signature
            .as_ref()
            .map(|f| f.file_path.as_str()),
    );
    if let Some(partner) = &salesperson.partner {
        r.put("SalemanName", partner.full_name());
        r.put_opt("SalemanPhone", partner.fixed_phone.as_deref());
        r.put_opt("SalemanEmail", partner.email_address.as_deref());
    }
}

fn put_company(order: &SaleOrder, r: &mut Record) {
    let company = &order.company;
    r.put("CompanyName", &company.name);
    r.put_opt("logo_height", company.logo_height);
    r.put_opt("logo_width", company.logo_width);

    if let Some(config) = &order.sale_config {
        r.put("DisplaySaleman", config.display_saleman_on_printing);
        r.put_opt("ClientBox", config.sale_order_client_box.as_deref());
        r.put_opt("LegalNote", config.sale_order_legal_note.as_deref());
        r.put("DisplayDeliveryCondition", config.display_del_cond_on_printing);
        r.put("displayProductCodeOnPrinting", config.display_product_code_on_printing);
        r.put("displayTaxDetailOnPrinting", config.display_tax_detail_on_printing);
        r.put(
            "displayEstimDelivDateOnPrinting",
            config.display_estim_deliv_date_on_printing,
        );
        r.put("displayCustomerCodeOnPrinting", config.display_customer_code_on_printing);
        r.put(
            "displayProductPictureOnPrinting",
            config.display_product_picture_on_printing,
        );
    }

    r.put_opt("logo_path", order.effective_logo().map(|f| f.file_path.as_str()));
}

fn put_partners(order: &SaleOrder, r: &mut Record) {
    let client = &order.client_partner;
    r.put_opt("CustomerCode", client.partner_seq.as_deref());
    // Historically filled with the partner sequence; templates rely on it.
    r.put_opt("partner_type_select", client.partner_seq.as_deref());
    r.put("ClientPartName", &client.name);
    r.put_opt("ClientPartFirstName", client.first_name.as_deref());
    r.put_opt("ClientTitle", client.title.map(|t| t.select_value()));

    if let Some(contact) = &order.contact_partner {
        r.put("ContactName", &contact.name);
        r.put_opt("ContactFirstName", contact.first_name.as_deref());
    }

    let invoicing_country = order
        .main_invoicing_address
        .as_ref()
        .and_then(|a| a.country.as_ref());
    r.put_opt("invoicecountry", invoicing_country.map(|c| c.name.as_str()));

    let delivery_country = order
        .delivery_address
        .as_ref()
        .and_then(|a| a.country.as_ref());
    r.put_opt("DeliveryCountry", delivery_country.map(|c| c.name.as_str()));
}
