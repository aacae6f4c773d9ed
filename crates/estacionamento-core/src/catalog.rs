//! Literal catalogs inserted by the seed generator.
//!
//! Prefix entries repeat on purpose: repeats weight the uniform draw.

/// Values for `cor.cor`.
pub const COLORS: &[&str] = &[
    "Azul",
    "Vermelho",
    "Verde",
    "Amarelo",
    "Laranja",
    "Rosa",
    "Roxo",
    "Cinza",
    "Preto",
    "Branco",
    "Bege",
    "Marrom",
    "Ciano",
    "Magenta",
    "Turquesa",
    "Lilás",
    "Ametista",
    "Bordo",
    "Pêssego",
    "Caramelo",
    "Dourado",
    "Prateado",
    "Verde-oliva",
    "Azul-marinho",
    "Branco-gelo",
    "Fucsia",
    "Mostarda",
    "Esmeralda",
    "Perolado",
    "Salmon",
];

/// Values for `tipo.tipo`; each receives a random base price.
pub const TICKET_TYPES: &[&str] = &[
    "Caminhão",
    "Motocicleta",
    "Carro",
    "Ônibus",
    "Van",
    "Caminhonete",
    "Furgão",
    "Micro-ônibus",
    "Picape",
    "Conjunto de Veículos",
    "Trator",
    "Ônibus Escolar",
    "Veículo de Passeio",
    "Veículo Elétrico",
    "Veículo Híbrido",
    "Carro de Luxo",
    "Carro Esportivo",
    "Carro Utilitário",
    "Veículo Comercial",
    "Veículo de Carga",
    "Veículo de Coleta de Lixo",
    "Veículo de Emergência",
    "Carro Conversível",
    "Carro de Corrida",
    "Motocicleta Esportiva",
    "Motocicleta Cruiser",
    "Carro Sedan",
    "Carro Hatch",
    "Carro Coupé",
    "Veículo de Terreno",
    "Carro Compacto",
    "Carro Familiar",
    "Carro Blindado",
    "Caminhão Baú",
    "Caminhão Pipa",
    "Caminhão Tanque",
    "Caminhão Munck",
    "Veículo 4x4",
    "Veículo Off-road",
    "Caminhão de Entrega",
    "Carro Cabriolet",
    "Caminhão Carga Geral",
    "Van Escolar",
    "Caminhão de Reboque",
    "Carro de Passeio",
    "Veículo de Transporte de Valores",
    "Veículo de Turismo",
    "Carro de Grande Porte",
    "Veículo de Transporte Público",
    "Veículo Antigo",
    "Caminhão de Pick-up",
    "Carro de Competição",
    "Carro de Drift",
];

/// Values for `fabricante.nome`.
pub const MANUFACTURERS: &[&str] = &[
    "Toyota",
    "Ford",
    "Chevrolet",
    "Volkswagen",
    "Honda",
    "BMW",
    "Mercedes-Benz",
    "Nissan",
    "Hyundai",
    "Ferrari",
    "Lamborghini",
    "Tesla",
    "Peugeot",
    "Renault",
    "Subaru",
    "Mitsubishi",
    "Dodge",
    "BYD",
    "Chery",
    "Geely",
    "Great Wall",
    "Nio",
    "XPeng",
    "Roewe",
    "Hongqi",
    "Wuling",
    "Lynk & Co",
    "Haval",
    "Baojun",
    "Leapmotor",
];

/// Prefixes for generated `modelo.modelo` names.
pub const MODEL_PREFIXES: &[&str] = &[
    "Sport",
    "Elite",
    "Pro",
    "Racing",
    "Max",
    "Turbo",
    "X",
    "S",
    "GT",
    "RS",
    "R",
    "ST",
    "V6",
    "V8",
    "V10",
    "Coupé",
    "Cabriolet",
    "Rally",
    "Speed",
    "Power",
    "Evo",
    "Lux",
    "Performance",
    "Pro",
    "Zero",
    "Infinity",
    "Ultra",
    "Fusion",
    "Hyper",
    "Evolution",
    "RS",
    "Track",
    "Edition",
    "XR",
    "LX",
    "RSX",
    "QX",
    "Rev",
    "Neo",
    "Striker",
    "Boost",
    "Z",
    "Viper",
    "Vortex",
    "Force",
    "Maximus",
    "Flash",
    "Spirit",
    "Vision",
    "Rev",
    "Ace",
    "Thunder",
    "Pulse",
    "Vanguard",
    "Veloz",
    "Spectra",
    "Meteor",
    "Phantom",
    "Skyline",
];
