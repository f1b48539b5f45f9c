//! Integration tests for the file-order, sequential and concurrent-eligible
//! cursors.

use sql_tagmap::{Kind, parse};

const SCRIPT: &str = "
-- tag=name: Select1
-- tag=FileName: peoples.psv
select * from peoples;
-- tag=name: Select2
select * from cities;
-- tag=name: Update1
update peoples set Name = 'Leo' where ID = 1;
-- tag=name: Insert1
insert into Cities (ID, Name) values (1, 'Barcelone');
-- tag=name: CreateTable
create table countries (ID number, Name varchar2(50));
-- tag=name: FAKE1
-- select * from Fake;
-- tag=name: CreateIndex
create index counX1 on countries (ID);
-- tag=name: Grant1
grant select on peoples to public;
-- tag=name: Select3
select * from KK3;
";

fn names(cursor: sql_tagmap::Cursor<'_>) -> Vec<&str> {
    cursor.map(sql_tagmap::Statement::name).collect()
}

#[test]
fn test_file_order() {
    let statements = parse(SCRIPT).unwrap();
    let mut cursor = statements.file_order();

    assert!(cursor.advance());
    assert_eq!(cursor.current_text(), Some("select * from peoples"));
    assert_eq!(cursor.current_kind(), Kind::Dql);
    assert_eq!(cursor.current_tag_value("name"), Some("Select1"));
    assert_eq!(cursor.current_tag_value("fileName"), Some("peoples.psv"));

    assert!(cursor.advance());
    assert_eq!(cursor.current_text(), Some("select * from cities"));
    assert_eq!(cursor.current_tag_value("fileName"), None);

    let rest = names(cursor);
    assert_eq!(
        rest,
        ["Update1", "Insert1", "CreateTable", "CreateIndex", "Grant1", "Select3"]
    );
}

#[test]
fn test_sequential_and_concurrent_partitions() {
    let statements = parse(SCRIPT).unwrap();
    let (sequential, concurrent) = statements.concurrent_cursors();

    assert_eq!(sequential.len(), 4);
    assert_eq!(concurrent.len(), 3);
    assert_eq!(
        names(sequential),
        ["Update1", "Insert1", "CreateTable", "CreateIndex"]
    );
    assert_eq!(names(concurrent), ["Select1", "Select2", "Select3"]);
    assert_eq!(statements.kind("grant1"), Kind::Unknown);
    assert_eq!(statements.file_order().len(), 8);
}

#[test]
fn test_sequential_kinds() {
    let statements = parse(SCRIPT).unwrap();
    let (mut sequential, _) = statements.concurrent_cursors();
    let mut kinds = Vec::new();
    while sequential.advance() {
        kinds.push(sequential.current_kind());
    }
    assert_eq!(kinds, [Kind::Dml, Kind::Dml, Kind::Ddl, Kind::Ddl]);
}

#[test]
fn test_only_queries() {
    let script = "
-- tag=name: Select1
-- tag=FileName: peoples.psv
select * from peoples;
-- tag=name: Select2
select * from cities;
";
    let statements = parse(script).unwrap();
    let (mut sequential, concurrent) = statements.concurrent_cursors();
    assert!(sequential.is_empty());
    assert!(!sequential.advance());
    assert!(sequential.current().is_none());
    assert_eq!(names(concurrent), ["Select1", "Select2"]);
}

#[test]
fn test_without_queries() {
    let script = "
-- tag=name: Update1
update peoples set Name = 'Leo' where ID = 1;
-- tag=name: Insert1
insert into Cities (ID, Name) values (1, 'Barcelone');
-- tag=name: CreateTable
create table countries (ID number, Name varchar2(50));
";
    let statements = parse(script).unwrap();
    let (sequential, mut concurrent) = statements.concurrent_cursors();
    assert_eq!(names(sequential), ["Update1", "Insert1", "CreateTable"]);
    assert!(!concurrent.advance());
}

#[test]
fn test_cursors_are_independent() {
    let statements = parse(SCRIPT).unwrap();
    let mut first = statements.file_order();
    let mut second = statements.file_order();

    first.advance();
    first.advance();
    second.advance();

    assert_eq!(first.current_name(), Some("select2"));
    assert_eq!(second.current_name(), Some("select1"));

    let cloned = first.clone();
    assert_eq!(cloned.current_name(), Some("select2"));
    assert_eq!(names(cloned).len(), 6);
    assert_eq!(first.current_name(), Some("select2"));
}

#[test]
fn test_collection_is_shareable_across_threads() {
    let statements = parse(SCRIPT).unwrap();
    std::thread::scope(|scope| {
        let sequential = scope.spawn(|| names(statements.concurrent_cursors().0).len());
        let concurrent = scope.spawn(|| names(statements.concurrent_cursors().1).len());
        assert_eq!(sequential.join().unwrap(), 4);
        assert_eq!(concurrent.join().unwrap(), 3);
    });
}
