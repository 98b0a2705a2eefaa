//! HTML used by the persons views.
//!
//! Action links carry `data-accion` (and `data-id` when they point at a
//! record) instead of inline scripts; the page dispatches clicks on them.

use super::Template;

const TABLE_HEADER: &str = r####"<table width="100%" class="listado-personas">
                <thead>
                    <th width="10%">ID</th>
                    <th width="10%">Nombre</th>
                    <th width="20%">Apellido</th>
                    <th width="10%">Fecha de nacimiento</th>
                    <th width="10%">País</th>
                    <th width="15%">Participaciones mundiales</th>
                    <th width="10%">Medallas de oro</th>
                    <th></th>
                </thead>
                <tbody>
"####;

const TABLE_ROW: &str = r####"
    <tr title="### ID ###">
        <td>### ID ###</td>
        <td>### NOMBRE ###</td>
        <td>### APELLIDO ###</td>
        <td>### FECHA DE ACIMIENTO ###</td>
        <td>### PAÍS ###</td>
        <td>### PARTICIPACIONES MUNDIALES ###</td>
        <td>### MEDALLAS DE ORO ###</td>
        <td>
            <div>
                <a href="#" data-accion="mostrar" data-id="### ID ###" class="opcion-secundaria mostrar">Mostrar</a>
            </div>
        </td>
    </tr>
    "####;

const TABLE_FOOTER: &str = r####"        </tbody>
             </table>
             "####;

const FORM: &str = r####"
<form method='post' action=''>
    <table width="100%" class="listado-personas">
        <thead>
            <th width="10%">Id</th><th width="20%">Nombre</th><th width="20%">Apellido</th><th width="10%">Fecha de nacimiento</th>
            <th width="15%">País</th><th width="25%">Participaciones mundiales</th><th width="10%">Medallas de oro</th>
        </thead>
        <tbody>
            <tr title="### ID ###">
                <td><input type="text" class="form-persona-elemento" disabled id="form-persona-id"
                        value="### ID ###"
                        name="id_persona"/>
                </td>
                <td><input type="text" class="form-persona-elemento editable" ### DESHABILITADO ###
                        id="form-persona-nombre" required value="### NOMBRE ###"
                        name="nombre_persona"/>
                </td>
                <td><input type="text" class="form-persona-elemento editable" ### DESHABILITADO ###
                        id="form-persona-apellido" value="### APELLIDO ###"
                        name="apellido_persona"/>
                </td>
                <td><input type="text" class="form-persona-elemento" disabled
                        id="form-persona-fechaN" value="### FECHA DE ACIMIENTO ###"
                        name="fechaN_persona"/>
                </td>
                <td><input type="text" class="form-persona-elemento editable" ### DESHABILITADO ###
                        id="form-persona-pais" required value="### PAÍS ###"
                        name="pais_persona"/>
                </td>
                <td><input type="text" class="form-persona-elemento" disabled
                        id="form-persona-participaciones" required value="### PARTICIPACIONES MUNDIALES ###"
                        name="participaciones_persona"/>
                </td>
                <td><input type="number" class="form-persona-elemento editable" ### DESHABILITADO ###
                        id="form-persona-medallas" max="20" required value="### MEDALLAS DE ORO ###"
                        name="medallas_persona"/>
                </td>
            </tr>
            <tr>
                <td></td>
                <td>
                    <div>
                        <a href="#" data-accion="anterior" data-id="### ANTERIOR ###" class="opcion-secundaria ### OPCIONES PRIMARIAS ###">Anterior</a>
                    </div>
                </td>
                <td>
                    <div><a href="#" data-accion="guardar" class="opcion-terciaria editar ### OPCIONES EDICION ###">Guardar</a></div>
                </td>
                <td>
                    <div><a href="#" data-accion="editar" class="opcion-secundaria ### OPCIONES PRIMARIAS ###">Editar</a></div>
                </td>
                <td>
                    <div><a href="#" data-accion="cancelar" class="opcion-terciaria editar ### OPCIONES EDICION ###">Cancelar</a></div>
                </td>
                <td>
                    <div>
                        <a href="#" data-accion="siguiente" data-id="### SIGUIENTE ###" class="opcion-secundaria ### OPCIONES PRIMARIAS ###">Siguiente</a>
                    </div>
                </td>
                <td></td>
            </tr>
        </tbody>
    </table>
</form>
"####;

/// Element ids of the form inputs, read back when saving.
pub mod form_ids {
    pub const ID: &str = "form-persona-id";
    pub const NAME: &str = "form-persona-nombre";
    pub const SURNAME: &str = "form-persona-apellido";
    pub const COUNTRY: &str = "form-persona-pais";
    pub const GOLD_MEDALS: &str = "form-persona-medallas";

    /// Inputs that `edit` enables.
    pub const EDITABLE: [&str; 4] = [NAME, SURNAME, COUNTRY, GOLD_MEDALS];
}

/// The four templates of the persons views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Templates {
    pub table_header: Template,
    pub table_row: Template,
    pub table_footer: Template,
    pub form: Template,
}

impl Default for Templates {
    fn default() -> Self {
        Self {
            table_header: Template::parse(TABLE_HEADER),
            table_row: Template::parse(TABLE_ROW),
            table_footer: Template::parse(TABLE_FOOTER),
            form: Template::parse(FORM),
        }
    }
}
