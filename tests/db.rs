mod common;

#[test]
fn test_creates_db_and_hands_out_connections() {
    let test_db = common::TestDb::new("test_connection.db");
    let conn = test_db.pool().get();
    assert!(conn.is_ok());
}
