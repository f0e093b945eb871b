//! End-to-end round trips: UBL to host telegrams, simulated warehouse
//! confirmations, and back to UBL documents.

use chrono::{NaiveDate, NaiveDateTime};
use wamas_convert::{detect_flow, ConvertOptions, Converter};

fn fixed_now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 6, 1)
        .unwrap()
        .and_hms_opt(8, 30, 0)
        .unwrap()
}

fn converter() -> Converter {
    Converter::new(ConvertOptions {
        now: Some(fixed_now()),
        ..ConvertOptions::default()
    })
}

fn flow_of(converter: &Converter, raw: &[u8]) -> Option<&'static str> {
    let groups = converter.telegram_to_records(raw).unwrap();
    let types: Vec<&str> = groups.iter().map(|(t, _)| t.as_str()).collect();
    detect_flow(&types)
}

const RECEPTION_UBL: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<DespatchAdvice>
  <cbc:ID>WEV001</cbc:ID>
  <cbc:IssueDate>2024-06-03</cbc:IssueDate>
  <cbc:IssueTime>14:00:00</cbc:IssueTime>
  <cac:DespatchSupplierParty>
    <cac:Party><cac:PartyIdentification><cbc:ID>SUP1</cbc:ID></cac:PartyIdentification></cac:Party>
  </cac:DespatchSupplierParty>
  <cac:DespatchLine>
    <cbc:ID>1</cbc:ID>
    <cbc:DeliveredQuantity unitCode="XBQ">5</cbc:DeliveredQuantity>
    <cac:Item>
      <cac:SellersItemIdentification><cbc:ID>ART-A</cbc:ID></cac:SellersItemIdentification>
      <cac:ItemInstance>
        <cac:LotIdentification><cbc:LotNumberID>LOT-9</cbc:LotNumberID></cac:LotIdentification>
      </cac:ItemInstance>
    </cac:Item>
  </cac:DespatchLine>
  <cac:DespatchLine>
    <cbc:ID>2</cbc:ID>
    <cbc:DeliveredQuantity unitCode="LTR">2.5</cbc:DeliveredQuantity>
    <cac:Item>
      <cac:StandardItemIdentification><cbc:ID>ART-B</cbc:ID></cac:StandardItemIdentification>
    </cac:Item>
  </cac:DespatchLine>
</DespatchAdvice>"#;

#[test]
fn test_reception_full_circle() {
    let converter = converter();

    let telegram = converter
        .ubl_to_telegram(RECEPTION_UBL, &["WEAK", "WEAP"])
        .unwrap();
    assert_eq!(telegram.lines().count(), 3);
    assert!(flow_of(&converter, telegram.as_bytes()) == Some("Reception"));

    let confirmations = converter.telegram_to_telegram(telegram.as_bytes()).unwrap();
    assert_eq!(confirmations.lines().count(), 3);
    assert!(flow_of(&converter, confirmations.as_bytes()) == Some("Reception"));

    let documents = converter
        .telegram_to_documents(confirmations.as_bytes())
        .unwrap();
    assert_eq!(documents.len(), 1);

    let doc = &documents[0];
    assert!(doc.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
    assert!(doc.contains("<cbc:ID>WEV001</cbc:ID>"));
    assert!(doc.contains("<cbc:ID>ART-A</cbc:ID>"));
    assert!(doc.contains("<cbc:ID>ART-B</cbc:ID>"));
    assert!(doc.contains("<cbc:LotNumberID>LOT-9</cbc:LotNumberID>"));
    // quantities survive the implied-decimal wire layout
    assert!(doc.contains("<cbc:DeliveredQuantity>5</cbc:DeliveredQuantity>"));
    assert!(doc.contains("<cbc:DeliveredQuantity>2.5</cbc:DeliveredQuantity>"));
    // house unit codes come back as UBL codes
    assert!(doc.contains("<cbc:Note>XBQ</cbc:Note>"));
    assert!(doc.contains("<cbc:Note>LTR</cbc:Note>"));
}

const PICKING_UBL: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<DespatchAdvice>
  <cbc:ID>AUS001</cbc:ID>
  <cbc:IssueDate>2024-06-03</cbc:IssueDate>
  <cbc:IssueTime>14:00:00</cbc:IssueTime>
  <cac:OrderReference><cbc:ID>SO42</cbc:ID></cac:OrderReference>
  <cac:DeliveryCustomerParty>
    <cac:Party><cac:PartyIdentification><cbc:ID>C007</cbc:ID></cac:PartyIdentification></cac:Party>
  </cac:DeliveryCustomerParty>
  <cac:DespatchLine>
    <cbc:ID>1</cbc:ID>
    <cbc:DeliveredQuantity unitCode="XBQ">12</cbc:DeliveredQuantity>
    <cac:Item>
      <cac:SellersItemIdentification><cbc:ID>ART-A</cbc:ID></cac:SellersItemIdentification>
    </cac:Item>
  </cac:DespatchLine>
  <cac:DespatchLine>
    <cbc:ID>2</cbc:ID>
    <cbc:DeliveredQuantity unitCode="XBQ">6</cbc:DeliveredQuantity>
    <cac:Item>
      <cac:SellersItemIdentification><cbc:ID>ART-B</cbc:ID></cac:SellersItemIdentification>
    </cac:Item>
  </cac:DespatchLine>
</DespatchAdvice>"#;

#[test]
fn test_picking_full_circle() {
    let converter = converter();

    let telegram = converter
        .ubl_to_telegram(PICKING_UBL, &["AUSK", "AUSP"])
        .unwrap();
    assert_eq!(telegram.lines().count(), 3);
    assert!(flow_of(&converter, telegram.as_bytes()) == Some("Picking"));

    // the order head fans out to an order and a package confirmation
    let confirmations = converter.telegram_to_telegram(telegram.as_bytes()).unwrap();
    assert_eq!(confirmations.lines().count(), 4);
    assert!(flow_of(&converter, confirmations.as_bytes()) == Some("Picking"));

    let documents = converter
        .telegram_to_documents(confirmations.as_bytes())
        .unwrap();
    assert_eq!(documents.len(), 1);

    let doc = &documents[0];
    assert!(doc.contains("<cbc:ID>AUS001</cbc:ID>"));
    assert!(doc.contains("<cbc:ID>SO42</cbc:ID>"));
    assert!(doc.contains("<cbc:ID>C007</cbc:ID>"));
    assert_eq!(doc.matches("<cac:DespatchLine>").count(), 2);
    assert!(doc.contains("<cbc:DeliveredQuantity>12</cbc:DeliveredQuantity>"));
    // the simulated package carries the order number as its id, so it
    // shows up on the transport unit and on every line shipment
    assert!(doc.contains("<cac:TransportHandlingUnit>"));
    assert!(doc.matches("<cbc:ID>AUS001</cbc:ID>").count() >= 3);
}

const RETURN_UBL: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<DespatchAdvice>
  <cbc:ID>RET001</cbc:ID>
  <cbc:IssueDate>2024-06-03</cbc:IssueDate>
  <cbc:IssueTime>14:00:00</cbc:IssueTime>
  <cac:OrderReference><cbc:ID>SO42</cbc:ID></cac:OrderReference>
  <cac:DeliveryCustomerParty>
    <cac:Party><cac:PartyIdentification><cbc:ID>C007</cbc:ID></cac:PartyIdentification></cac:Party>
  </cac:DeliveryCustomerParty>
  <cac:DespatchLine>
    <cbc:ID>1</cbc:ID>
    <cbc:DeliveredQuantity unitCode="XBQ">3</cbc:DeliveredQuantity>
    <cac:Item>
      <cac:SellersItemIdentification><cbc:ID>ART-A</cbc:ID></cac:SellersItemIdentification>
    </cac:Item>
  </cac:DespatchLine>
</DespatchAdvice>"#;

#[test]
fn test_return_full_circle() {
    let converter = converter();

    let telegram = converter
        .ubl_to_telegram(RETURN_UBL, &["KRETK", "KRETP"])
        .unwrap();
    assert_eq!(telegram.lines().count(), 2);
    assert!(flow_of(&converter, telegram.as_bytes()) == Some("Return"));

    let confirmations = converter.telegram_to_telegram(telegram.as_bytes()).unwrap();
    let documents = converter
        .telegram_to_documents(confirmations.as_bytes())
        .unwrap();
    assert_eq!(documents.len(), 1);

    let doc = &documents[0];
    assert!(doc.contains("<cbc:ID>RET001</cbc:ID>"));
    assert!(doc.contains("<cbc:DespatchAdviceTypeCode>return</cbc:DespatchAdviceTypeCode>"));
    // the return reason defaulted on the host line survives
    assert!(doc.contains("<cbc:OutstandingReason>RETOUR</cbc:OutstandingReason>"));
    assert!(doc.contains("<cbc:ID>ART-A</cbc:ID>"));
}

#[test]
fn test_accented_text_survives_authoring() {
    let converter = converter();
    let xml = r#"<DespatchAdvice><cbc:ID>WEV002</cbc:ID><cbc:Note>Chambéry entrepôt</cbc:Note></DespatchAdvice>"#;
    let telegram = converter.ubl_to_telegram(xml, &["WEAK"]).unwrap();
    assert!(telegram.contains("Chambéry entrepôt"));
    // every char of the line has an ISO-8859-1 byte
    wamas_codec::encode_latin1(&telegram).unwrap();
}
