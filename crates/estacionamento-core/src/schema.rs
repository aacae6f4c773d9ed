/// Tables created by [`SCHEMA_DDL`], in dependency order.
pub const TABLES: &[&str] = &[
    "cor",
    "fabricante",
    "modelo",
    "praca",
    "veiculo",
    "tipo",
    "ticket",
];

/// DDL for the parking schema.
///
/// `praca.id_cidade` points at `cidade`, which is loaded from an external
/// script and never created here.
pub const SCHEMA_DDL: &str = r#"
CREATE TABLE IF NOT EXISTS cor (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    cor VARCHAR(50) NOT NULL
);

CREATE TABLE IF NOT EXISTS fabricante (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    nome VARCHAR(200) NOT NULL
);

CREATE TABLE IF NOT EXISTS modelo (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    id_fabricante INTEGER NOT NULL,
    modelo VARCHAR(200) NOT NULL,
    FOREIGN KEY (id_fabricante) REFERENCES fabricante(id)
);

CREATE TABLE IF NOT EXISTS praca (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    id_cidade INTEGER NOT NULL,
    bairro VARCHAR(200) NOT NULL,
    FOREIGN KEY (id_cidade) REFERENCES cidade(id)
);

CREATE TABLE IF NOT EXISTS veiculo (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    placa VARCHAR(10) NOT NULL UNIQUE,
    id_modelo INTEGER NOT NULL,
    id_cor INTEGER NOT NULL,
    FOREIGN KEY (id_modelo) REFERENCES modelo(id),
    FOREIGN KEY (id_cor) REFERENCES cor(id)
);

CREATE TABLE IF NOT EXISTS tipo (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    tipo VARCHAR(200) NOT NULL,
    valor FLOAT NOT NULL
);

CREATE TABLE IF NOT EXISTS ticket (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    id_veiculo INTEGER NOT NULL,
    id_tipo INTEGER NOT NULL,
    id_praca INTEGER NOT NULL,
    valor FLOAT NOT NULL,
    data_hora TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
    FOREIGN KEY (id_veiculo) REFERENCES veiculo(id),
    FOREIGN KEY (id_tipo) REFERENCES tipo(id),
    FOREIGN KEY (id_praca) REFERENCES praca(id)
);
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_table_is_created_idempotently() {
        for table in TABLES {
            let needle = format!("CREATE TABLE IF NOT EXISTS {table} (");
            assert!(SCHEMA_DDL.contains(&needle), "missing DDL for {table}");
        }
        assert_eq!(SCHEMA_DDL.matches("CREATE TABLE").count(), TABLES.len());
    }
}
