//! Static reference data: the ORX risk pairings and N1 name tables.

use serde::Serialize;

/// One canonical (N1, N2) pairing from the ORX reference taxonomy.
///
/// Serializes with the Spanish field names consumers expect on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct RiskEntry {
    /// Level-1 category, in its stored canonical spelling
    #[serde(rename = "Riesgo_nivel_1")]
    pub n1: &'static str,
    /// Level-2 risk belonging to that category
    #[serde(rename = "Riesgo_nivel_2")]
    pub n2: &'static str,
}

impl RiskEntry {
    const fn new(n1: &'static str, n2: &'static str) -> Self {
        Self { n1, n2 }
    }
}

/// Level-1 category names as offered to the oracle during selection.
///
/// Four of these are legacy spellings that differ from the stored taxonomy
/// ("Personas", "Terceros", "Seguridad física y seguridad laboral",
/// "Delito financiero"); [`canonicalize`](crate::canonicalize) bridges them.
/// The last four categories have no N2 entries in [`ORX_RISKS`] yet, so
/// selecting them never yields refined risks.
pub const N1_CATALOG: [&str; 16] = [
    "Personas",
    "Fraude externo",
    "Fraude interno",
    "Seguridad física y seguridad laboral",
    "Continuidad del negocio",
    "Procesamiento y ejecución de transacciones",
    "Tecnología",
    "Conducta",
    "Legal",
    "Delito financiero",
    "Cumplimiento normativo",
    "Terceros",
    "Seguridad de la información (incluida ciberseguridad)",
    "Reporte legal y fiscal",
    "Gestión de datos",
    "Modelos",
];

/// Alternate N1 spelling to stored canonical spelling.
pub(crate) const N1_ALIASES: [(&str, &str); 4] = [
    ("Personas", "Gente"),
    ("Terceros", "Tercero"),
    ("Seguridad física y seguridad laboral", "Seguridad física y protección"),
    ("Delito financiero", "Delitos financieros"),
];

/// The full ORX reference set, in its published order.
pub const ORX_RISKS: [RiskEntry; 46] = [
    RiskEntry::new(
        "Gente",
        "Incumplimiento de la legislación laboral o de los requisitos reglamentarios",
    ),
    RiskEntry::new("Gente", "Relaciones laborales ineficaces"),
    RiskEntry::new("Gente", "Seguridad inadecuada en el lugar de trabajo"),
    RiskEntry::new("Fraude externo", "Fraude de terceros/proveedores"),
    RiskEntry::new("Fraude externo", "Fraude de agentes/corredores/intermediarios"),
    RiskEntry::new("Fraude externo", "Fraude de primera parte"),
    RiskEntry::new("Fraude interno", "Fraude interno cometido contra la organización"),
    RiskEntry::new("Fraude interno", "Fraude interno cometido contra clientes o terceros"),
    RiskEntry::new(
        "Seguridad física y protección",
        "Daños a los activos físicos de la organización",
    ),
    RiskEntry::new(
        "Seguridad física y protección",
        "Lesiones a empleados o afiliados fuera del lugar de trabajo",
    ),
    RiskEntry::new(
        "Seguridad física y protección",
        "Daños o perjuicios al patrimonio público",
    ),
    RiskEntry::new(
        "Continuidad del negocio",
        "Planificación de continuidad empresarial/gestión de eventos inadecuada",
    ),
    RiskEntry::new(
        "Procesamiento y ejecución de transacciones",
        "Fallo de procesamiento/ejecución relacionado con clientes y productos",
    ),
    RiskEntry::new(
        "Procesamiento y ejecución de transacciones",
        "Fallo de procesamiento/ejecución relacionado con valores y garantías",
    ),
    RiskEntry::new(
        "Procesamiento y ejecución de transacciones",
        "Fallo de procesamiento/ejecución relacionado con terceros",
    ),
    RiskEntry::new(
        "Procesamiento y ejecución de transacciones",
        "Fallo de procesamiento/ejecución relacionado con operaciones internas",
    ),
    RiskEntry::new(
        "Procesamiento y ejecución de transacciones",
        "Error en la ejecución del cambio",
    ),
    RiskEntry::new("Tecnología", "Fallo de hardware"),
    RiskEntry::new("Tecnología", "Fallo de software"),
    RiskEntry::new("Tecnología", "Fallo de red"),
    RiskEntry::new("Conducta", "Uso de información privilegiada"),
    RiskEntry::new("Conducta", "Antimonopolio/anticompetencia"),
    RiskEntry::new("Conducta", "Prácticas de mercado indebidas"),
    RiskEntry::new("Conducta", "Falla del servicio de preventa"),
    RiskEntry::new("Conducta", "Falla del servicio posventa"),
    RiskEntry::new(
        "Conducta",
        "Maltrato al cliente/incumplimiento de deberes hacia los clientes",
    ),
    RiskEntry::new("Conducta", "Mala gestión de cuentas de clientes"),
    RiskEntry::new("Conducta", "Distribución/comercialización inadecuada"),
    RiskEntry::new("Conducta", "Diseño inadecuado de producto/servicio"),
    RiskEntry::new("Conducta", "Denuncia de irregularidades"),
    RiskEntry::new(
        "Conducta",
        "Incumplimiento del código de conducta y mala conducta de los empleados",
    ),
    RiskEntry::new("Legal", "Mal manejo de los procesos legales"),
    RiskEntry::new("Legal", "Incumplimiento de derechos/obligaciones contractuales"),
    RiskEntry::new("Legal", "Incumplimiento de derechos/obligaciones extracontractuales"),
    RiskEntry::new(
        "Delitos financieros",
        "Blanqueo de capitales y financiación del terrorismo",
    ),
    RiskEntry::new("Delitos financieros", "Violación de sanciones"),
    RiskEntry::new("Delitos financieros", "Soborno y corrupción"),
    RiskEntry::new(
        "Delitos financieros",
        "Falla en el control de KYC y monitoreo de transacciones",
    ),
    RiskEntry::new("Cumplimiento normativo", "Relación ineficaz con los reguladores"),
    RiskEntry::new("Cumplimiento normativo", "Respuesta inadecuada al cambio regulatorio"),
    RiskEntry::new(
        "Cumplimiento normativo",
        "Licencia/certificación/registro inadecuados",
    ),
    RiskEntry::new(
        "Cumplimiento normativo",
        "Incumplimiento de actividades transfronterizas/regulaciones extraterritoriales",
    ),
    RiskEntry::new("Cumplimiento normativo", "Riesgo prudencial"),
    RiskEntry::new("Tercero", "Fallo en el control de gestión de terceros"),
    RiskEntry::new("Tercero", "Fallo en la selección de terceros"),
    RiskEntry::new("Tercero", "Supervisión continua deficiente de terceros"),
];
