use ::rusqlite::Connection;

pub fn setup_db() -> Connection {
    let conn = Connection::open_in_memory().expect("Failed to create in-memory database");
    conn.execute_batch(
        "CREATE TABLE MEMBER_STATUS (
            MEMBER_STATUS_CODE TEXT PRIMARY KEY,
            MEMBER_STATUS_NAME TEXT NOT NULL,
            DISPLAY_ORDER INTEGER
        );
        CREATE TABLE MEMBER (
            MEMBER_ID INTEGER PRIMARY KEY,
            MEMBER_NAME TEXT NOT NULL,
            MEMBER_STATUS_CODE TEXT REFERENCES MEMBER_STATUS (MEMBER_STATUS_CODE),
            SERVICE_RANK_CODE TEXT,
            BIRTHDATE TEXT
        );
        INSERT INTO MEMBER_STATUS VALUES ('FML', 'Formal', 1), ('PRV', 'Provisional', NULL);
        INSERT INTO MEMBER VALUES
            (1, 'Stojkovic', 'FML', NULL, '1965-03-03'),
            (2, 'Savicevic', 'FML', NULL, NULL),
            (3, 'Mijatovic', 'PRV', NULL, '1969-01-19'),
            (4, 'Jugovic', NULL, NULL, NULL);",
    )
    .expect("Failed to create tables");
    conn
}
