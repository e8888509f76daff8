// Ordered alias tables, highest priority first. The canonical camelCase name
// leads; the museum database's column names follow.

pub mod artwork {
    pub const ID: &[&str] = &["id", "idObra_Arte", "idObra", "IdObra"];
    pub const TITLE: &[&str] = &["title", "titulo", "Titulo"];
    pub const DESCRIPTION: &[&str] = &["description", "descripcion", "Descripcion"];
    pub const CREATION_YEAR: &[&str] =
        &["creationYear", "anio_creacion", "año_creacion", "AnioCreacion"];
    pub const DIMENSIONS: &[&str] = &["dimensions", "dimensiones", "Dimensiones"];
    pub const IMAGE_REFS: &[&str] = &["imageRefs", "urls", "imagenes"];
    pub const ARTIST_NAME: &[&str] = &["artistName", "nombre_artista"];
    pub const COLLECTION_TYPE: &[&str] = &["collectionType", "tipo_coleccion"];
    pub const COLLECTION_DESCRIPTION: &[&str] =
        &["collectionDescription", "descripcion_coleccion"];
    pub const DISPLAY_STATUS: &[&str] = &["displayStatus", "estado_exhibicion"];
    pub const EXHIBITION_NAME: &[&str] = &["exhibitionName", "nombre_exposicion"];
}

pub mod exhibition {
    pub const ID: &[&str] = &["id", "idExposicion"];
    pub const NAME: &[&str] = &["name", "Exposicion", "nombre"];
    pub const DESCRIPTION: &[&str] = &["description", "descripcion", "DescripcionExposicion"];
    pub const KIND: &[&str] = &["kind", "tipo"];
    pub const STATUS_TEXT: &[&str] = &["status", "estado"];
    pub const IMAGE_REFS: &[&str] = &["imageRefs", "urls"];
    pub const ROOM: &[&str] = &["room", "Sala"];
    pub const BUILDING: &[&str] = &["building", "Edificio"];
    pub const BRANCH: &[&str] = &["branch", "Sucursal"];
    pub const START_DATE: &[&str] = &["startDate", "FechaInicioExposicion"];
    pub const END_DATE: &[&str] = &["endDate", "FechaFinExposicion"];
    pub const TOTAL_WORKS: &[&str] = &["totalWorksCount", "TotalObras"];
    pub const WORKS_STILL_DISPLAYED: &[&str] = &["worksStillDisplayedCount", "ObrasAunExhibidas"];
    pub const WORK_DISPLAYS: &[&str] = &["workDisplays", "obras"];
}

/// A single artwork's display slot, as returned per exhibition.
pub mod work_window {
    pub const START: &[&str] = &["startDate", "fecha_hora_inicio"];
    pub const END: &[&str] = &["endDate", "fecha_hora_fin"];
}
