mod rusqlite;
