use tally_import::core::*;
use tally_import::documents::{DocumentSpec, Emit, Grouping, Wrapper, map_spec, map_table, spec};

fn ledger_spec(grouping: Grouping, wrapper: Wrapper) -> DocumentSpec {
    DocumentSpec {
        kind: DocumentKind::Customer,
        report: ReportName::AllMasters,
        identifier: "name",
        grouping,
        wrapper,
        emits: vec![Emit::Primary(
            NodeTemplate::new("LEDGER")
                .attr("NAME", FieldSpec::column("name"))
                .field("GUID", FieldSpec::guid(""))
                .child(
                    NodeTemplate::new("LINE")
                        .each_row()
                        .field("AMOUNT", FieldSpec::column("amount").amount()),
                ),
        )],
    }
}

#[test]
fn one_record_per_identified_row_in_order() {
    let table = Table::new(
        ["name", "amount"],
        vec![
            vec!["Alpha", "1"],
            vec!["  ", "2"],
            vec!["Beta", "3"],
            vec!["NaN", "4"],
            vec!["Gamma", "5"],
        ],
    );
    let (doc, diag) = map_spec(
        &ledger_spec(Grouping::PerRow, Wrapper::EachNode),
        &table,
        "Co",
        &mut SequentialIds::new(),
    );

    let names: Vec<_> = doc.records().iter().filter_map(|n| n.attr("NAME")).collect();
    assert_eq!(names, ["Alpha", "Beta", "Gamma"]);
    assert_eq!(doc.messages().len(), 3);
    assert_eq!(diag.skipped_rows(), [1, 3]);
    assert!(diag.issues().iter().all(|i| matches!(
        i,
        RowIssue::MissingIdentifier { column, .. } if column == "name"
    )));
}

#[test]
fn each_record_gets_its_own_guid() {
    let table = Table::new(["name"], vec![vec!["Alpha"], vec!["Beta"]]);
    let (doc, _) = map_spec(
        &ledger_spec(Grouping::PerRow, Wrapper::EachNode),
        &table,
        "Co",
        &mut SequentialIds::new(),
    );
    let guids: Vec<_> = doc.records().iter().filter_map(|n| n.child_text("GUID")).collect();
    assert_eq!(
        guids,
        [
            "00000000-0000-4000-8000-000000000001",
            "00000000-0000-4000-8000-000000000002"
        ]
    );
}

#[test]
fn leading_rows_collect_their_followers() {
    let table = Table::new(
        ["name", "amount"],
        vec![
            vec!["A", "1"],
            vec!["", "2"],
            vec!["", "3"],
            vec!["B", "4"],
            vec!["", "5.5"],
        ],
    );
    let grouped = group_by_leader(&table, "name");
    let shape: Vec<_> = grouped
        .groups
        .iter()
        .map(|g| (g.key.as_str(), g.followers.len()))
        .collect();
    assert_eq!(shape, [("A", 2), ("B", 1)]);
    assert!(grouped.orphans.is_empty());

    let (doc, diag) = map_spec(
        &ledger_spec(Grouping::LeadingRow, Wrapper::Shared),
        &table,
        "Co",
        &mut SequentialIds::new(),
    );
    assert!(diag.is_clean());
    assert_eq!(doc.messages().len(), 1);
    let amounts: Vec<Vec<_>> = doc
        .records()
        .iter()
        .map(|r| r.children_named("LINE").filter_map(|l| l.child_text("AMOUNT")).collect())
        .collect();
    assert_eq!(amounts, [vec!["1.00", "2.00", "3.00"], vec!["4.00", "5.50"]]);
}

#[test]
fn repeated_leader_key_starts_a_new_group() {
    let table = Table::new(["name"], vec![vec!["A"], vec![""], vec!["A"]]);
    let grouped = group_by_leader(&table, "name");
    assert_eq!(grouped.groups.len(), 2);
    assert_eq!(grouped.groups[0].followers.len(), 1);
    assert!(grouped.groups[1].followers.is_empty());
}

#[test]
fn rows_before_the_first_leader_are_orphans() {
    let table = Table::new(["name"], vec![vec![""], vec![""], vec!["A"]]);
    let (doc, diag) = map_spec(
        &ledger_spec(Grouping::LeadingRow, Wrapper::Shared),
        &table,
        "Co",
        &mut SequentialIds::new(),
    );
    assert_eq!(doc.records().len(), 1);
    assert_eq!(diag.skipped_rows(), [0, 1]);
    assert!(diag.issues().iter().all(|i| matches!(i, RowIssue::Orphan { .. })));
}

#[test]
fn envelope_carries_report_and_company() {
    let table = Table::new(["customer_name"], vec![vec!["Acme"]]);
    let config = ConversionConfigBuilder::new().company("Tools & Dies").build();
    let (doc, _) = map_table(DocumentKind::Customer, &table, &config, &mut SequentialIds::new());

    assert_eq!(
        doc.root.path("HEADER/TALLYREQUEST").and_then(Node::text),
        Some("Import Data")
    );
    assert_eq!(doc.report_name(), Some("All Masters"));
    let company = doc
        .root
        .path("BODY/IMPORTDATA/REQUESTDESC/STATICVARIABLES/SVCURRENTCOMPANY")
        .unwrap();
    assert_eq!(company.text(), Some("Tools &amp; Dies"));
    assert_eq!(company.text_unescaped(), "Tools & Dies");
    for message in doc.messages() {
        assert_eq!(message.tag, "TALLYMESSAGE");
        assert_eq!(message.attr("xmlns:UDF"), Some("TallyUDF"));
    }
}

#[test]
fn mapping_twice_gives_identical_trees() {
    let table = Table::new(
        ["name", "posting_date", "party_type", "party", "debit_in_account_currency"],
        vec![
            vec!["JV-1", "01-01-2024", "Customer", "Acme", "10"],
            vec!["", "", "", "Cash", ""],
        ],
    );
    let journal = spec(DocumentKind::JournalEntry);
    let first = map_spec(&journal, &table, "Co", &mut SequentialIds::new());
    let second = map_spec(&journal, &table, "Co", &mut SequentialIds::new());
    assert_eq!(first, second);
}

#[test]
fn documents_without_records_keep_the_scaffold() {
    let table = Table::new(["name"], Vec::<Vec<&str>>::new());
    for kind in DocumentKind::ALL {
        let (doc, diag) = map_table(kind, &table, &ConversionConfig::default(), &mut RandomIds);
        assert!(doc.records().is_empty(), "{kind}");
        assert!(diag.is_clean());
        assert_eq!(doc.report_name(), Some(ReportName::for_kind(kind).as_str()));
    }
}
