use super::layout::{render_signature, render_witness, signature_centered, signature_row};
use super::{FieldKind, Fields, RenderContext, Template, TemplateField};

const BLANK: &str = "____________________";
const CITY_BLANK: &str = "___________";
const MONEY_BLANK: &str = "___,00";

const fn field(key: &'static str, label: &'static str, kind: FieldKind) -> TemplateField {
    TemplateField { key, label, kind }
}

pub(super) static CATALOG: [Template; 10] = [
    Template {
        id: "servicos",
        title: "Prestação de Serviços",
        description: "Contrato completo para prestação de serviços entre empresas ou autônomos.",
        fields: &[
            field("contratante", "Nome do Contratante (Cliente)", FieldKind::Text),
            field("doc_contratante", "CPF/CNPJ do Contratante", FieldKind::Text),
            field("contratada", "Nome da Contratada (Prestador)", FieldKind::Text),
            field("doc_contratada", "CPF/CNPJ da Contratada", FieldKind::Text),
            field("servico", "Descrição Detalhada do Serviço", FieldKind::Textarea),
            field("valor", "Valor Total (R$)", FieldKind::Text),
            field("forma_pagamento", "Forma de Pagamento", FieldKind::Text),
            field("prazo", "Prazo de Execução", FieldKind::Text),
            field("cidade", "Cidade do Foro", FieldKind::Text),
            field("data", "Data do Contrato", FieldKind::Date),
        ],
        body: servicos,
    },
    Template {
        id: "locacao_residencial",
        title: "Locação Residencial",
        description: "Contrato detalhado para aluguel de imóveis residenciais.",
        fields: &[
            field("locador", "Nome do Locador", FieldKind::Text),
            field("doc_locador", "CPF do Locador", FieldKind::Text),
            field("locatario", "Nome do Locatário", FieldKind::Text),
            field("doc_locatario", "CPF do Locatário", FieldKind::Text),
            field("endereco", "Endereço Completo do Imóvel", FieldKind::Text),
            field("valor", "Valor Mensal do Aluguel (R$)", FieldKind::Text),
            field("dia_pagamento", "Dia do Vencimento", FieldKind::Number),
            field("prazo_meses", "Prazo da Locação (Meses)", FieldKind::Number),
            field("cidade", "Cidade", FieldKind::Text),
        ],
        body: locacao_residencial,
    },
    Template {
        id: "nda",
        title: "Acordo de Confidencialidade",
        description: "NDA (Non-Disclosure Agreement) para proteção de informações.",
        fields: &[
            field("parte_reveladora", "Parte Reveladora (Empresa/Pessoa)", FieldKind::Text),
            field("parte_recebedora", "Parte Recebedora (Empresa/Pessoa)", FieldKind::Text),
            field("objetivo", "Objetivo da Troca de Informações", FieldKind::Text),
            field("tempo_sigilo", "Tempo de Sigilo (anos)", FieldKind::Number),
            field("cidade", "Cidade", FieldKind::Text),
        ],
        body: nda,
    },
    Template {
        id: "compra_venda_veiculo",
        title: "Compra e Venda de Veículo",
        description: "Contrato seguro para transferência de propriedade de veículos.",
        fields: &[
            field("vendedor", "Nome do Vendedor", FieldKind::Text),
            field("doc_vendedor", "CPF do Vendedor", FieldKind::Text),
            field("comprador", "Nome do Comprador", FieldKind::Text),
            field("doc_comprador", "CPF do Comprador", FieldKind::Text),
            field("modelo", "Modelo do Veículo", FieldKind::Text),
            field("placa", "Placa", FieldKind::Text),
            field("chassi", "Chassi", FieldKind::Text),
            field("ano", "Ano/Modelo", FieldKind::Text),
            field("valor", "Valor da Venda (R$)", FieldKind::Text),
            field("cidade", "Cidade", FieldKind::Text),
        ],
        body: compra_venda_veiculo,
    },
    Template {
        id: "termo_adesao",
        title: "Termo de Adesão",
        description: "Termo para adesão a serviços, plataformas ou programas.",
        fields: &[
            field("empresa", "Nome da Empresa/Organização", FieldKind::Text),
            field("usuario", "Nome do Usuário/Aderente", FieldKind::Text),
            field("doc_usuario", "CPF do Usuário", FieldKind::Text),
            field("servico", "Serviço/Produto Contratado", FieldKind::Text),
            field("cidade", "Cidade", FieldKind::Text),
        ],
        body: termo_adesao,
    },
    Template {
        id: "trabalho",
        title: "Contrato de Trabalho",
        description: "Modelo para contratação de funcionário (CLT).",
        fields: &[
            field("empregador", "Empregador (Empresa)", FieldKind::Text),
            field("cnpj", "CNPJ do Empregador", FieldKind::Text),
            field("empregado", "Nome do Empregado", FieldKind::Text),
            field("cpf", "CPF do Empregado", FieldKind::Text),
            field("cargo", "Cargo/Função", FieldKind::Text),
            field("salario", "Salário Mensal (R$)", FieldKind::Text),
            field("horario", "Horário de Trabalho", FieldKind::Text),
            field("cidade", "Cidade", FieldKind::Text),
        ],
        body: trabalho,
    },
    Template {
        id: "mei",
        title: "Prestação de Serviços MEI",
        description: "Contrato específico para Microempreendedor Individual.",
        fields: &[
            field("mei", "Nome do MEI (Contratado)", FieldKind::Text),
            field("cnpj_mei", "CNPJ do MEI", FieldKind::Text),
            field("cliente", "Nome do Cliente (Contratante)", FieldKind::Text),
            field("doc_cliente", "CPF/CNPJ do Cliente", FieldKind::Text),
            field("servico", "Descrição do Serviço", FieldKind::Textarea),
            field("valor", "Valor (R$)", FieldKind::Text),
            field("cidade", "Cidade", FieldKind::Text),
        ],
        body: mei,
    },
    Template {
        id: "locacao_comercial",
        title: "Locação Comercial",
        description: "Contrato completo para locação de imóvel comercial.",
        fields: &[
            field("locador", "Locador (Proprietário)", FieldKind::Text),
            field("doc_locador", "CPF/CNPJ Locador", FieldKind::Text),
            field("locatario", "Locatário (Inquilino)", FieldKind::Text),
            field("doc_locatario", "CPF/CNPJ Locatário", FieldKind::Text),
            field("imovel", "Endereço do Imóvel Comercial", FieldKind::Text),
            field("atividade", "Atividade Comercial Permitida", FieldKind::Text),
            field("valor", "Valor do Aluguel (R$)", FieldKind::Text),
            field("prazo", "Prazo (Meses)", FieldKind::Number),
            field("cidade", "Cidade", FieldKind::Text),
        ],
        body: locacao_comercial,
    },
    Template {
        id: "distrato",
        title: "Distrato Contratual",
        description: "Instrumento para formalizar o encerramento de um contrato vigente.",
        fields: &[
            field("parte_a", "Parte A (Quem contratou)", FieldKind::Text),
            field("doc_a", "CPF/CNPJ Parte A", FieldKind::Text),
            field("parte_b", "Parte B (Contratado)", FieldKind::Text),
            field("doc_b", "CPF/CNPJ Parte B", FieldKind::Text),
            field("contrato_origem", "Descrição do Contrato Original", FieldKind::Text),
            field("data_contrato", "Data do Contrato Original", FieldKind::Date),
            field("cidade", "Cidade", FieldKind::Text),
        ],
        body: distrato,
    },
    Template {
        id: "imagem",
        title: "Cessão de Direitos de Imagem",
        description: "Autorização legal para uso de imagem e voz.",
        fields: &[
            field("cedente", "Cedente (Pessoa na imagem)", FieldKind::Text),
            field("doc_cedente", "CPF/RG do Cedente", FieldKind::Text),
            field("cessionario", "Cessionário (Quem usará)", FieldKind::Text),
            field("finalidade", "Finalidade do Uso (Publicidade, Institucional, etc)", FieldKind::Text),
            field("midias", "Mídias (Internet, TV, Impresso)", FieldKind::Text),
            field("prazo", "Prazo de Uso", FieldKind::Text),
            field("cidade", "Cidade", FieldKind::Text),
        ],
        body: imagem,
    },
];

/// `<cidade>, <date>` closing line shared by every contract
fn place_and_date(data: &Fields<'_>, date: &str) -> String {
    format!(
        r#"<p style="text-align: center;">{}, {}</p>"#,
        data.get("cidade", CITY_BLANK),
        date
    )
}

fn two_party(data: &Fields<'_>, left: (&str, &str, &str, &str), right: (&str, &str, &str, &str)) -> String {
    signature_row(&[
        render_signature(&data.raw(left.0), left.1, left.2, left.3, "48%"),
        render_signature(&data.raw(right.0), right.1, right.2, right.3, "48%"),
    ])
}

fn servicos(data: &Fields<'_>, _ctx: &RenderContext) -> String {
    let closing = format!(
        r#"<p style="text-align: center;">{}, {}.</p>"#,
        data.get("cidade", CITY_BLANK),
        data.date("data", "___ de ____________ de ______")
    );

    format!(
        r#"
        <div>
          <h2 style="text-align: center; margin-bottom: 2rem;">CONTRATO DE PRESTAÇÃO DE SERVIÇOS</h2>

          <p><strong>IDENTIFICAÇÃO DAS PARTES</strong></p>
          <p><strong>CONTRATANTE:</strong> {contratante}, inscrito(a) no CPF/CNPJ sob o nº {doc_contratante}, doravante denominado(a) simplesmente <strong>CONTRATANTE</strong>.</p>
          <p><strong>CONTRATADA:</strong> {contratada}, inscrito(a) no CPF/CNPJ sob o nº {doc_contratada}, doravante denominado(a) simplesmente <strong>CONTRATADA</strong>.</p>

          <p>As partes acima identificadas têm, entre si, justo e acertado o presente Contrato de Prestação de Serviços, que se regerá pelas cláusulas seguintes:</p>

          <h3>CLÁUSULA 1ª - DO OBJETO</h3>
          <p>O presente contrato tem por objeto a prestação dos seguintes serviços pela CONTRATADA à CONTRATANTE:</p>
          <p style="background: #f8f9fa; padding: 10px; border: 1px dashed #ccc;">{servico}</p>

          <h3>CLÁUSULA 2ª - DAS OBRIGAÇÕES DA CONTRATADA</h3>
          <p>I - Executar os serviços contratados com zelo, diligência e dentro dos padrões técnicos exigidos;</p>
          <p>II - Cumprir os prazos estabelecidos neste instrumento;</p>
          <p>III - Manter sigilo sobre quaisquer dados ou informações fornecidas pela CONTRATANTE.</p>

          <h3>CLÁUSULA 3ª - DO PREÇO E FORMA DE PAGAMENTO</h3>
          <p>Pelos serviços prestados, a CONTRATANTE pagará à CONTRATADA a importância total de <strong>R$ {valor}</strong>.</p>
          <p>O pagamento será realizado da seguinte forma: {forma_pagamento}.</p>

          <h3>CLÁUSULA 4ª - DO PRAZO</h3>
          <p>Os serviços terão início imediato após a assinatura deste contrato e deverão ser concluídos no prazo de: {prazo}.</p>

          <h3>CLÁUSULA 5ª - DA RESCISÃO</h3>
          <p>O presente contrato poderá ser rescindido por qualquer uma das partes, mediante aviso prévio de 30 (trinta) dias, ou imediatamente em caso de descumprimento de qualquer cláusula.</p>

          <h3>CLÁUSULA 6ª - DO FORO</h3>
          <p>Fica eleito o foro da comarca de {foro} para dirimir quaisquer dúvidas oriundas deste contrato.</p>

          <br/><br/>
          {closing}
          <br/><br/>

          {parties}
          {witnesses}
        </div>
      "#,
        contratante = data.get("contratante", BLANK),
        doc_contratante = data.get("doc_contratante", BLANK),
        contratada = data.get("contratada", BLANK),
        doc_contratada = data.get("doc_contratada", BLANK),
        servico = data.get("servico", "Descrever detalhadamente os serviços..."),
        valor = data.get("valor", MONEY_BLANK),
        forma_pagamento = data.get("forma_pagamento", "Conforme combinado"),
        prazo = data.get("prazo", "___ dias/meses"),
        foro = data.get("cidade", BLANK),
        closing = closing,
        parties = two_party(
            data,
            ("contratante", "CONTRATANTE", "Assinatura do Contratante", "{{SIGNATURE_CONTRATANTE}}"),
            ("contratada", "CONTRATADA", "Assinatura da Contratada", "{{SIGNATURE_CONTRATADA}}"),
        ),
        witnesses = signature_row(&[render_witness(1), render_witness(2)]),
    )
}

fn locacao_residencial(data: &Fields<'_>, ctx: &RenderContext) -> String {
    format!(
        r#"
        <div>
          <h2 style="text-align: center;">CONTRATO DE LOCAÇÃO RESIDENCIAL</h2>

          <p><strong>LOCADOR:</strong> {locador}, CPF {doc_locador}.</p>
          <p><strong>LOCATÁRIO:</strong> {locatario}, CPF {doc_locatario}.</p>

          <h3>I - DO OBJETO DA LOCAÇÃO</h3>
          <p>O presente contrato tem como objeto a locação do imóvel residencial situado na {endereco}, de propriedade do LOCADOR.</p>

          <h3>II - DO PRAZO</h3>
          <p>A locação terá vigência pelo prazo de {prazo_meses} meses, iniciando-se na data de assinatura deste instrumento.</p>

          <h3>III - DO VALOR E PAGAMENTO</h3>
          <p>O valor mensal do aluguel é fixado em <strong>R$ {valor}</strong>, devendo ser pago até o dia {dia_pagamento} de cada mês subsequente ao vencido.</p>

          <h3>IV - DOS ENCARGOS</h3>
          <p>Além do aluguel, caberá ao LOCATÁRIO o pagamento de todos os encargos tributários (IPTU), despesas de condomínio, consumo de água, luz, esgoto e gás.</p>

          <h3>V - DA CONSERVAÇÃO</h3>
          <p>O LOCATÁRIO obriga-se a manter o imóvel em perfeitas condições de uso e habitabilidade, devolvendo-o nas mesmas condições em que o recebeu.</p>

          <br/>
          {closing}
          <br/><br/>

          {parties}
        </div>
      "#,
        locador = data.get("locador", BLANK),
        doc_locador = data.get("doc_locador", BLANK),
        locatario = data.get("locatario", BLANK),
        doc_locatario = data.get("doc_locatario", BLANK),
        endereco = data.get("endereco", "________________________________________"),
        prazo_meses = data.get("prazo_meses", "___"),
        valor = data.get("valor", MONEY_BLANK),
        dia_pagamento = data.get("dia_pagamento", "__"),
        closing = place_and_date(data, &ctx.display_date()),
        parties = two_party(
            data,
            ("locador", "LOCADOR", "Assinatura do Locador", "{{SIGNATURE_LOCADOR}}"),
            ("locatario", "LOCATÁRIO", "Assinatura do Locatário", "{{SIGNATURE_LOCATARIO}}"),
        ),
    )
}

fn nda(data: &Fields<'_>, ctx: &RenderContext) -> String {
    format!(
        r#"
        <div>
          <h2 style="text-align: center;">ACORDO DE CONFIDENCIALIDADE (NDA)</h2>

          <p>Pelo presente instrumento, as partes:</p>
          <p><strong>REVELADORA:</strong> {reveladora}</p>
          <p><strong>RECEBEDORA:</strong> {recebedora}</p>

          <p>Resolvem celebrar o presente Acordo de Confidencialidade, sob as seguintes cláusulas:</p>

          <h3>1. DO OBJETO</h3>
          <p>O objetivo deste acordo é proteger as Informações Confidenciais disponibilizadas pela REVELADORA à RECEBEDORA no âmbito de: {objetivo}.</p>

          <h3>2. DA CONFIDENCIALIDADE</h3>
          <p>A RECEBEDORA compromete-se a não utilizar, reproduzir ou divulgar a terceiros quaisquer Informações Confidenciais sem o consentimento prévio e por escrito da REVELADORA.</p>

          <h3>3. DA VIGÊNCIA</h3>
          <p>A obrigação de confidencialidade permanecerá em vigor pelo período de {tempo_sigilo} anos após a assinatura deste termo.</p>

          <h3>4. DA PENALIDADE</h3>
          <p>A violação deste acordo sujeitará o infrator ao pagamento de perdas e danos comprovados, sem prejuízo das demais sanções legais cabíveis.</p>

          <br/>
          {closing}
          <br/><br/>

          {parties}
        </div>
      "#,
        reveladora = data.get("parte_reveladora", BLANK),
        recebedora = data.get("parte_recebedora", BLANK),
        objetivo = data.get("objetivo", BLANK),
        tempo_sigilo = data.get("tempo_sigilo", "5"),
        closing = place_and_date(data, &ctx.display_date()),
        parties = two_party(
            data,
            ("parte_reveladora", "REVELADORA", "Assinatura", "{{SIGNATURE_REVELADORA}}"),
            ("parte_recebedora", "RECEBEDORA", "Assinatura", "{{SIGNATURE_RECEBEDORA}}"),
        ),
    )
}

fn compra_venda_veiculo(data: &Fields<'_>, ctx: &RenderContext) -> String {
    format!(
        r#"
        <div>
          <h2 style="text-align: center;">CONTRATO DE COMPRA E VENDA DE VEÍCULO</h2>

          <p><strong>VENDEDOR:</strong> {vendedor}, CPF {doc_vendedor}.</p>
          <p><strong>COMPRADOR:</strong> {comprador}, CPF {doc_comprador}.</p>

          <h3>DO OBJETO</h3>
          <p>O VENDEDOR vende ao COMPRADOR o veículo de sua propriedade, livre e desembaraçado de quaisquer ônus, com as seguintes características:</p>
          <ul>
            <li>Modelo: {modelo}</li>
            <li>Placa: {placa}</li>
            <li>Chassi: {chassi}</li>
            <li>Ano/Modelo: {ano}</li>
          </ul>

          <h3>DO PREÇO</h3>
          <p>O preço certo e ajustado para a venda é de <strong>R$ {valor}</strong>, pago neste ato.</p>

          <h3>DA RESPONSABILIDADE</h3>
          <p>O VENDEDOR responsabiliza-se por multas e tributos anteriores a esta data. O COMPRADOR assume a responsabilidade pela transferência do veículo junto ao DETRAN no prazo de 30 dias.</p>

          <br/>
          {closing}
          <br/><br/>

          {parties}
        </div>
      "#,
        vendedor = data.get("vendedor", BLANK),
        doc_vendedor = data.get("doc_vendedor", BLANK),
        comprador = data.get("comprador", BLANK),
        doc_comprador = data.get("doc_comprador", BLANK),
        modelo = data.get("modelo", BLANK),
        placa = data.get("placa", "_______"),
        chassi = data.get("chassi", BLANK),
        ano = data.get("ano", "____/____"),
        valor = data.get("valor", MONEY_BLANK),
        closing = place_and_date(data, &ctx.display_date()),
        parties = two_party(
            data,
            ("vendedor", "VENDEDOR", "Assinatura", "{{SIGNATURE_VENDEDOR}}"),
            ("comprador", "COMPRADOR", "Assinatura", "{{SIGNATURE_COMPRADOR}}"),
        ),
    )
}

fn termo_adesao(data: &Fields<'_>, ctx: &RenderContext) -> String {
    format!(
        r#"
        <div>
          <h2 style="text-align: center;">TERMO DE ADESÃO</h2>

          <p>Pelo presente instrumento, o <strong>ADERENTE</strong> abaixo identificado, manifesta sua livre e expressa concordância com os termos e condições de uso dos serviços prestados pela <strong>{empresa}</strong>.</p>

          <h3>DADOS DO ADERENTE</h3>
          <p>Nome: {usuario}</p>
          <p>CPF: {doc_usuario}</p>

          <h3>DO OBJETO</h3>
          <p>O presente termo formaliza a adesão aos serviços de: {servico}.</p>

          <h3>DECLARAÇÃO</h3>
          <p>O ADERENTE declara ter lido, compreendido e aceito todas as cláusulas do Contrato Principal/Termos de Uso que rege a prestação dos serviços.</p>

          <br/>
          {closing}
          <br/><br/>

          {signature}
        </div>
      "#,
        empresa = data.get("empresa", "EMPRESA"),
        usuario = data.get("usuario", BLANK),
        doc_usuario = data.get("doc_usuario", BLANK),
        servico = data.get("servico", BLANK),
        closing = place_and_date(data, &ctx.display_date()),
        signature = signature_centered(&render_signature(
            &data.raw("usuario"),
            "ADERENTE",
            "Assinatura do Usuário",
            "{{SIGNATURE_USUARIO}}",
            "60%",
        )),
    )
}

fn trabalho(data: &Fields<'_>, ctx: &RenderContext) -> String {
    format!(
        r#"
        <div>
          <h2 style="text-align: center;">CONTRATO INDIVIDUAL DE TRABALHO</h2>

          <p><strong>EMPREGADOR:</strong> {empregador}, CNPJ {cnpj}.</p>
          <p><strong>EMPREGADO:</strong> {empregado}, CPF {cpf}, CTPS nº _____ Série _____.</p>

          <p>As partes firmam o presente contrato de trabalho por prazo indeterminado, mediante as seguintes cláusulas:</p>

          <h3>1. DA FUNÇÃO</h3>
          <p>O EMPREGADO exercerá a função de <strong>{cargo}</strong>, comprometendo-se a executá-la com zelo e lealdade.</p>

          <h3>2. DO SALÁRIO</h3>
          <p>O EMPREGADO perceberá a remuneração mensal de <strong>R$ {salario}</strong>, a ser paga até o 5º dia útil do mês subsequente.</p>

          <h3>3. DO HORÁRIO</h3>
          <p>A jornada de trabalho será: {horario}.</p>

          <h3>4. DOS DESCONTOS</h3>
          <p>O EMPREGADO autoriza o desconto em folha de pagamento das importâncias referentes aos encargos legais (INSS, IRRF) e benefícios concedidos.</p>

          <br/>
          {closing}
          <br/><br/>

          {parties}
        </div>
      "#,
        empregador = data.get("empregador", BLANK),
        cnpj = data.get("cnpj", BLANK),
        empregado = data.get("empregado", BLANK),
        cpf = data.get("cpf", BLANK),
        cargo = data.get("cargo", BLANK),
        salario = data.get("salario", MONEY_BLANK),
        horario = data.get("horario", "44 horas semanais"),
        closing = place_and_date(data, &ctx.display_date()),
        parties = two_party(
            data,
            ("empregador", "EMPREGADOR", "Assinatura", "{{SIGNATURE_EMPREGADOR}}"),
            ("empregado", "EMPREGADO", "Assinatura", "{{SIGNATURE_EMPREGADO}}"),
        ),
    )
}

fn mei(data: &Fields<'_>, ctx: &RenderContext) -> String {
    format!(
        r#"
        <div>
          <h2 style="text-align: center;">CONTRATO DE PRESTAÇÃO DE SERVIÇOS - MEI</h2>

          <p><strong>CONTRATADO (MEI):</strong> {mei}, CNPJ {cnpj_mei}.</p>
          <p><strong>CONTRATANTE:</strong> {cliente}, CPF/CNPJ {doc_cliente}.</p>

          <h3>DO OBJETO</h3>
          <p>O CONTRATADO prestará ao CONTRATANTE, de forma autônoma e sem vínculo empregatício, os serviços de: {servico}.</p>

          <h3>DO VALOR</h3>
          <p>O valor acordado para a execução do serviço é de <strong>R$ {valor}</strong>, contra a emissão da respectiva Nota Fiscal de Serviços (NFS-e).</p>

          <h3>DA INEXISTÊNCIA DE VÍNCULO</h3>
          <p>As partes declaram que não há subordinação jurídica ou hierárquica, nem habitualidade que caracterize vínculo empregatício.</p>

          <br/>
          {closing}
          <br/><br/>

          {parties}
        </div>
      "#,
        mei = data.get("mei", BLANK),
        cnpj_mei = data.get("cnpj_mei", BLANK),
        cliente = data.get("cliente", BLANK),
        doc_cliente = data.get("doc_cliente", BLANK),
        servico = data.get("servico", BLANK),
        valor = data.get("valor", MONEY_BLANK),
        closing = place_and_date(data, &ctx.display_date()),
        parties = two_party(
            data,
            ("mei", "CONTRATADO (MEI)", "Assinatura", "{{SIGNATURE_MEI}}"),
            ("cliente", "CONTRATANTE", "Assinatura", "{{SIGNATURE_CLIENTE}}"),
        ),
    )
}

fn locacao_comercial(data: &Fields<'_>, ctx: &RenderContext) -> String {
    format!(
        r#"
        <div>
          <h2 style="text-align: center;">CONTRATO DE LOCAÇÃO COMERCIAL</h2>

          <p><strong>LOCADOR:</strong> {locador}, portador do CPF/CNPJ {doc_locador}.</p>
          <p><strong>LOCATÁRIO:</strong> {locatario}, portador do CPF/CNPJ {doc_locatario}.</p>

          <h3>CLÁUSULA 1ª - DO OBJETO</h3>
          <p>O presente contrato tem por objeto a locação para fins <strong>NÃO RESIDENCIAIS</strong> do imóvel situado em: {imovel}.</p>

          <h3>CLÁUSULA 2ª - DA DESTINAÇÃO</h3>
          <p>O imóvel destina-se exclusivamente à atividade de: {atividade}, sendo vedada a mudança de destinação sem anuência expressa do LOCADOR.</p>

          <h3>CLÁUSULA 3ª - DO PRAZO</h3>
          <p>O prazo de locação é de {prazo} meses, iniciando-se na assinatura deste contrato.</p>

          <h3>CLÁUSULA 4ª - DO ALUGUEL</h3>
          <p>O aluguel mensal será de <strong>R$ {valor}</strong>, reajustável anualmente pelo índice IGPM-FGV.</p>

          <h3>CLÁUSULA 5ª - DAS BENFEITORIAS</h3>
          <p>Quaisquer obras ou modificações no imóvel dependem de prévia autorização por escrito do LOCADOR. Benfeitorias necessárias não serão indenizáveis.</p>

          <br/>
          {closing}
          <br/><br/>

          {parties}
        </div>
      "#,
        locador = data.get("locador", BLANK),
        doc_locador = data.get("doc_locador", BLANK),
        locatario = data.get("locatario", BLANK),
        doc_locatario = data.get("doc_locatario", BLANK),
        imovel = data.get("imovel", BLANK),
        atividade = data.get("atividade", "Comércio em Geral"),
        prazo = data.get("prazo", "___"),
        valor = data.get("valor", MONEY_BLANK),
        closing = place_and_date(data, &ctx.display_date()),
        parties = two_party(
            data,
            ("locador", "LOCADOR", "Assinatura", "{{SIGNATURE_LOCADOR}}"),
            ("locatario", "LOCATÁRIO", "Assinatura", "{{SIGNATURE_LOCATARIO}}"),
        ),
    )
}

fn distrato(data: &Fields<'_>, ctx: &RenderContext) -> String {
    format!(
        r#"
        <div>
          <h2 style="text-align: center;">TERMO DE DISTRATO</h2>

          <p><strong>PRIMEIRA DISTRATANTE:</strong> {parte_a}, CPF/CNPJ {doc_a}.</p>
          <p><strong>SEGUNDA DISTRATANTE:</strong> {parte_b}, CPF/CNPJ {doc_b}.</p>

          <h3>DO OBJETO</h3>
          <p>As partes acima qualificadas, de comum acordo, resolvem <strong>RESCINDIR</strong>, para todos os fins de direito, o contrato de {contrato_origem}, firmado em {data_contrato}.</p>

          <h3>DA QUITAÇÃO</h3>
          <p>As partes dão-se mútua, plena, geral e irrevogável quitação de todas as obrigações decorrentes do contrato ora rescindido, nada mais tendo a reclamar uma da outra a qualquer título.</p>

          <br/>
          {closing}
          <br/><br/>

          {parties}
        </div>
      "#,
        parte_a = data.get("parte_a", BLANK),
        doc_a = data.get("doc_a", BLANK),
        parte_b = data.get("parte_b", BLANK),
        doc_b = data.get("doc_b", BLANK),
        contrato_origem = data.get("contrato_origem", "Prestação de Serviços/Locação"),
        data_contrato = data.date("data_contrato", "__/__/____"),
        closing = place_and_date(data, &ctx.display_date()),
        parties = two_party(
            data,
            ("parte_a", "PRIMEIRA DISTRATANTE", "Assinatura", "{{SIGNATURE_DISTRATANTE_1}}"),
            ("parte_b", "SEGUNDA DISTRATANTE", "Assinatura", "{{SIGNATURE_DISTRATANTE_2}}"),
        ),
    )
}

fn imagem(data: &Fields<'_>, ctx: &RenderContext) -> String {
    format!(
        r#"
        <div>
          <h2 style="text-align: center;">TERMO DE CESSÃO DE DIREITOS DE IMAGEM E VOZ</h2>

          <p><strong>CEDENTE:</strong> {cedente}, portador do documento {doc_cedente}.</p>
          <p><strong>CESSIONÁRIO:</strong> {cessionario}.</p>

          <h3>DA AUTORIZAÇÃO</h3>
          <p>Pelo presente instrumento, o CEDENTE autoriza o CESSIONÁRIO a utilizar sua imagem e/ou voz, a título gratuito (ou oneroso, se aplicável), para fins de: {finalidade}.</p>

          <h3>DOS MEIOS DE VEICULAÇÃO</h3>
          <p>A presente autorização abrange a veiculação nas seguintes mídias: {midias}.</p>

          <h3>DO PRAZO E TERRITÓRIO</h3>
          <p>A utilização da imagem é permitida pelo prazo de {prazo}, em território nacional e internacional.</p>

          <br/>
          {closing}
          <br/><br/>

          {signature}
        </div>
      "#,
        cedente = data.get("cedente", BLANK),
        doc_cedente = data.get("doc_cedente", BLANK),
        cessionario = data.get("cessionario", BLANK),
        finalidade = data.get("finalidade", "Divulgação"),
        midias = data.get("midias", "Todas as mídias"),
        prazo = data.get("prazo", "Indeterminado"),
        closing = place_and_date(data, &ctx.display_date()),
        signature = signature_centered(&render_signature(
            &data.raw("cedente"),
            "CEDENTE",
            "Assinatura",
            "{{SIGNATURE_CEDENTE}}",
            "60%",
        )),
    )
}
